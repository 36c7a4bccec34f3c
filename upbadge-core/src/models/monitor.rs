//! Monitor configuration types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Monitor Config
// ============================================================================

/// A registered monitor: a target URL plus display metadata.
///
/// Created once at registration and immutable afterwards. Monitors are
/// looked up by their opaque `id`; nothing else references them by pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Opaque monitor identifier (8 lowercase alphanumerics).
    pub id: String,
    /// The URL whose reachability this monitor tracks.
    pub target_url: String,
    /// Human-readable name shown on badges.
    pub display_name: String,
    /// Badge theme.
    #[serde(default)]
    pub theme: Theme,
    /// When the monitor was registered.
    pub created_at: DateTime<Utc>,
}

impl MonitorConfig {
    /// Creates a new monitor config stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        target_url: impl Into<String>,
        display_name: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            id: id.into(),
            target_url: target_url.into(),
            display_name: display_name.into(),
            theme,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Badge theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light badge on a white card.
    #[default]
    Default,
    /// Dark card for dark sites.
    Dark,
    /// No card, no border, dot and text only.
    Minimal,
}

impl Theme {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dark => "Dark",
            Self::Minimal => "Minimal",
        }
    }

    /// Parses a theme name, falling back to the default theme.
    ///
    /// Unknown names map to [`Theme::Default`] rather than erroring so that
    /// a stale embed never breaks rendering.
    pub fn parse_lossy(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            "minimal" => Self::Minimal,
            _ => Self::Default,
        }
    }

    /// Returns all themes.
    pub fn all() -> &'static [Theme] {
        &[Self::Default, Self::Dark, Self::Minimal]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================
