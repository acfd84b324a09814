//! Theme type shared by the controller, host bindings, and UI.

use std::fmt;

/// Glyph shown on the toggle while dark mode is active (click to go light).
pub const SUN_GLYPH: &str = "☀️";

/// Glyph shown on the toggle while light mode is active (click to go dark).
pub const MOON_GLYPH: &str = "🌙";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` is light. Stored values are not validated.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Theme encoded by the root attribute (present with `"dark"`, or absent).
    pub fn from_root(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Value written to the root attribute. `None` means remove it.
    pub fn root_value(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Theme::Light => MOON_GLYPH,
            Theme::Dark => SUN_GLYPH,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
