//! Badge color palettes.

use upbadge_core::Theme;

/// Colors for one badge theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Card background.
    pub bg: &'static str,
    /// Main text color.
    pub text: &'static str,
    /// Card border, or `transparent` for none.
    pub border: &'static str,
    /// Dot color when online.
    pub online: &'static str,
    /// Dot color when offline.
    pub offline: &'static str,
    /// Dot color when status is unknown.
    pub unknown: &'static str,
}

const DEFAULT: Palette = Palette {
    bg: "#ffffff",
    text: "#374151",
    border: "#e5e7eb",
    online: "#22c55e",
    offline: "#ef4444",
    unknown: "#6b7280",
};

const DARK: Palette = Palette {
    bg: "#1f2937",
    text: "#f9fafb",
    border: "#374151",
    online: "#22c55e",
    offline: "#ef4444",
    unknown: "#6b7280",
};

const MINIMAL: Palette = Palette {
    bg: "transparent",
    text: "#374151",
    border: "transparent",
    online: "#22c55e",
    offline: "#ef4444",
    unknown: "#9ca3af",
};

impl Palette {
    /// Returns the palette for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Default => DEFAULT,
            Theme::Dark => DARK,
            Theme::Minimal => MINIMAL,
        }
    }

    /// Dot color for a reachability state.
    pub fn status_color(&self, online: bool) -> &'static str {
        if online { self.online } else { self.offline }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_a_palette() {
        for theme in Theme::all() {
            let palette = Palette::for_theme(*theme);
            assert!(palette.online.starts_with('#'));
            assert!(palette.offline.starts_with('#'));
        }
    }

    #[test]
    fn test_minimal_is_borderless() {
        let palette = Palette::for_theme(Theme::Minimal);
        assert_eq!(palette.border, "transparent");
        assert_eq!(palette.bg, "transparent");
    }
}
