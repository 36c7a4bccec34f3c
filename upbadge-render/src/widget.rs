//! Embeddable widget script generation.
//!
//! Emits the IIFE users embed with a `<script src>` tag. The widget is pure
//! display: it polls the JSON endpoint and re-renders; every decision about
//! freshness and uptime already happened server-side.

use upbadge_core::Theme;

/// How often the embedded widget re-fetches, in milliseconds.
const REFRESH_INTERVAL_MS: u64 = 60_000;

/// Widget template. Tokens (`__ID__`, `__API_BASE__`, `__THEME__`,
/// `__REFRESH_MS__`) are substituted at generation time; a template with
/// string replacement avoids escaping every brace in the CSS.
const WIDGET_TEMPLATE: &str = r#"(function(){
'use strict';

// upbadge embedded widget
// ID: __ID__

var config = {
  id: '__ID__',
  api: '__API_BASE__',
  theme: '__THEME__',
  refreshInterval: __REFRESH_MS__
};

function createBadgeContainer() {
  var container = document.createElement('div');
  container.id = 'upbadge-container-' + config.id;
  var shadow = container.attachShadow({ mode: 'open' });

  shadow.innerHTML =
    '<style>' +
    '.badge{display:inline-flex;align-items:center;gap:8px;padding:8px 12px;' +
    'background:' + (config.theme === 'dark' ? '#1f2937' : '#ffffff') + ';' +
    'border-radius:6px;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;' +
    'font-size:13px;box-shadow:0 1px 3px rgba(0,0,0,0.1);transition:all 0.2s ease;' +
    'color:' + (config.theme === 'dark' ? '#f9fafb' : '#374151') + ';}' +
    '.badge:hover{box-shadow:0 2px 8px rgba(0,0,0,0.15);}' +
    '.status-dot{width:10px;height:10px;border-radius:50%;}' +
    '.status-dot.online{background:#22c55e;animation:pulse 2s infinite;}' +
    '.status-dot.offline{background:#ef4444;}' +
    '.status-dot.unknown{background:#6b7280;}' +
    '@keyframes pulse{0%,100%{opacity:1;}50%{opacity:0.6;}}' +
    '.status-text{font-weight:500;}' +
    '.response-time{font-size:12px;opacity:0.8;}' +
    '.uptime{font-size:12px;font-weight:600;padding:2px 6px;' +
    'background:rgba(34,197,94,0.1);border-radius:4px;color:#22c55e;}' +
    '.loading{opacity:0.6;}' +
    '</style>' +
    '<div class="badge"><span class="status-text loading">Loading...</span></div>';

  return { container: container, shadow: shadow };
}

function renderBadge(shadow, data) {
  var online = data.status && data.status.online;
  var dotClass = data.status ? (online ? 'online' : 'offline') : 'unknown';
  var html = '<span class="status-dot ' + dotClass + '"></span>';
  html += '<span class="status-text">' + (online ? 'Online' : 'Offline') + '</span>';
  if (data.status && data.status.response_time_ms > 0) {
    html += '<span class="response-time">' + data.status.response_time_ms + 'ms</span>';
  }
  if (data.uptime && data.uptime.percentage !== null) {
    html += '<span class="uptime">' + data.uptime.percentage + '%</span>';
  }
  shadow.querySelector('.badge').innerHTML = html;
}

function fetchStatus(shadow) {
  fetch(config.api + '/' + config.id + '.json')
    .then(function(res) { return res.json(); })
    .then(function(data) { renderBadge(shadow, data); })
    .catch(function() {
      shadow.querySelector('.badge').innerHTML =
        '<span class="status-dot unknown"></span><span class="status-text">Unknown</span>';
    });
}

var parts = createBadgeContainer();
var script = document.currentScript;
if (script && script.parentNode) {
  script.parentNode.insertBefore(parts.container, script);
} else {
  document.body.appendChild(parts.container);
}

fetchStatus(parts.shadow);
setInterval(function() { fetchStatus(parts.shadow); }, config.refreshInterval);
})();
"#;

/// Generates the embeddable widget script for a monitor.
///
/// `api_base` is the public base of the v1 API, e.g.
/// `https://status.example.com/v1`, with no trailing slash.
pub fn widget_js(monitor_id: &str, api_base: &str, theme: Theme) -> String {
    let theme_name = match theme {
        Theme::Default => "default",
        Theme::Dark => "dark",
        Theme::Minimal => "minimal",
    };

    WIDGET_TEMPLATE
        .replace("__ID__", monitor_id)
        .replace("__API_BASE__", api_base.trim_end_matches('/'))
        .replace("__THEME__", theme_name)
        .replace("__REFRESH_MS__", &REFRESH_INTERVAL_MS.to_string())
}
