use crate::error::ThemeError;

// =============================================================================
// PreferenceStore - single-entry key-value persistence
// =============================================================================

/// Persistent key-value storage for the theme preference.
pub trait PreferenceStore {
    /// Read the stored value. `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

// =============================================================================
// SystemAppearance - host "prefers dark" query
// =============================================================================

/// Read-only view of the host's appearance preference.
pub trait SystemAppearance {
    /// Whether the system prefers dark appearance. Unknown reads as `false`.
    fn prefers_dark(&self) -> bool;
}

// =============================================================================
// ThemeSurface - root attribute + toggle glyph
// =============================================================================

/// The visible state: an attribute on the document root and the toggle's glyph.
///
/// The root attribute is the single source of truth for "is dark active".
pub trait ThemeSurface {
    /// Current value of the root attribute, `None` when absent.
    fn root_value(&self) -> Option<String>;

    /// Set the root attribute, or remove it when `value` is `None`.
    fn set_root_value(&mut self, value: Option<&str>) -> Result<(), ThemeError>;

    fn set_glyph(&mut self, glyph: &str) -> Result<(), ThemeError>;
}
