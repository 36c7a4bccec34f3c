//! Landing page with embed instructions.

use actix_web::{HttpRequest, HttpResponse};

/// `GET /`: a small HTML page explaining how to create and embed a badge.
pub async fn home(req: HttpRequest) -> HttpResponse {
    let info = req.connection_info();
    let origin = format!("{}://{}", info.scheme(), info.host());

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>upbadge</title>
  <style>
    body {{ font-family: system-ui, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; }}
    pre {{ background: #f5f5f5; padding: 16px; border-radius: 8px; overflow-x: auto; }}
    code {{ font-family: 'SF Mono', 'Consolas', monospace; font-size: 14px; }}
    h1 {{ color: #333; }}
    .section {{ margin: 30px 0; }}
  </style>
</head>
<body>
  <h1>upbadge</h1>
  <p>Self-hostable status monitoring badges.</p>

  <div class="section">
    <h2>Create a Monitor</h2>
    <pre><code>curl -X POST {origin}/api/monitors \
  -H "Content-Type: application/json" \
  -d '{{"target_url": "https://example.com", "display_name": "Example API"}}'</code></pre>
  </div>

  <div class="section">
    <h2>Embed on Your Site</h2>
    <pre><code>&lt;script src="{origin}/v1/YOUR_ID.js"&gt;&lt;/script&gt;</code></pre>
  </div>

  <div class="section">
    <h2>API Endpoints</h2>
    <ul>
      <li><code>GET /v1/:id.js</code> &mdash; Embeddable widget script</li>
      <li><code>GET /v1/:id.svg</code> &mdash; SVG badge image</li>
      <li><code>GET /v1/:id.json</code> &mdash; JSON status data</li>
      <li><code>GET /v1/:id/check</code> &mdash; Force a status check</li>
      <li><code>POST /api/monitors</code> &mdash; Create a new monitor</li>
    </ul>
  </div>

  <div class="section">
    <h2>Health Check</h2>
    <pre><code>curl {origin}/health</code></pre>
  </div>
</body>
</html>"#
    );

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
