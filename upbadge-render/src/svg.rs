//! SVG badge rendering.

use upbadge_core::Theme;

use crate::theme::Palette;

const BASE_WIDTH: u32 = 200;
const UPTIME_EXTRA_WIDTH: u32 = 30;
const BADGE_HEIGHT: u32 = 40;

const FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

const PULSE_ANIMATION: &str =
    r#"<animate attributeName="opacity" values="0.6;1;0.6" dur="2s" repeatCount="indefinite"/>"#;

/// The fields a badge displays.
#[derive(Debug, Clone)]
pub struct BadgeView<'a> {
    /// Monitor display name (used for the accessibility label).
    pub name: &'a str,
    /// Current reachability.
    pub online: bool,
    /// Last response time in milliseconds; 0 hides the field.
    pub response_time_ms: u64,
    /// Rolling uptime, when known.
    pub uptime_percentage: Option<f64>,
    /// Badge theme.
    pub theme: Theme,
}

/// Renders the full status badge.
pub fn render_badge(view: &BadgeView<'_>) -> String {
    let palette = Palette::for_theme(view.theme);
    let status_color = palette.status_color(view.online);
    let status_text = if view.online { "Online" } else { "Offline" };

    let width = BASE_WIDTH
        + if view.uptime_percentage.is_some() {
            UPTIME_EXTRA_WIDTH
        } else {
            0
        };

    let mut svg = format!(
        r#"<svg width="{width}" height="{BADGE_HEIGHT}" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{label}: {status_text}">
  <rect width="{width}" height="{BADGE_HEIGHT}" fill="{bg}" rx="6"/>
  <circle cx="20" cy="20" r="6" fill="{status_color}">{pulse}</circle>
  <text x="35" y="25" font-family="{FONT_STACK}" font-size="13" font-weight="500" fill="{text}">{status_text}</text>
"#,
        label = escape_xml(view.name),
        bg = palette.bg,
        text = palette.text,
        pulse = if view.online { PULSE_ANIMATION } else { "" },
    );

    if view.response_time_ms > 0 {
        svg.push_str(&format!(
            "  <text x=\"95\" y=\"25\" font-family=\"{FONT_STACK}\" font-size=\"12\" fill=\"{}\" opacity=\"0.8\">{}ms</text>\n",
            palette.text, view.response_time_ms,
        ));
    }

    if let Some(uptime) = view.uptime_percentage {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"25\" font-family=\"{FONT_STACK}\" font-size=\"12\" font-weight=\"600\" fill=\"{status_color}\">{}%</text>\n",
            width - 35,
            format_percentage(uptime),
        ));
    }

    if palette.border != "transparent" {
        svg.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" x=\"0.5\" y=\"0.5\" fill=\"none\" stroke=\"{}\" rx=\"6\"/>\n",
            width - 1,
            BADGE_HEIGHT - 1,
            palette.border,
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Renders the 16x16 dot-only badge.
pub fn render_dot_badge(online: bool, theme: Theme) -> String {
    let palette = Palette::for_theme(theme);
    let color = palette.status_color(online);
    let label = if online { "Online" } else { "Offline" };
    let pulse = if online { PULSE_ANIMATION } else { "" };

    format!(
        r#"<svg width="16" height="16" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="{label}">
  <circle cx="8" cy="8" r="6" fill="{color}">{pulse}</circle>
</svg>"#
    )
}

/// Formats an already-rounded percentage without a trailing `.0`.
fn format_percentage(pct: f64) -> String {
    if (pct - pct.trunc()).abs() < f64::EPSILON {
        format!("{pct:.0}")
    } else {
        format!("{pct:.1}")
    }
}

/// Minimal XML escaping for text that ends up inside attribute values.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// Tests
// ============================================================================
