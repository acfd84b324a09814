//! In-memory host bindings.
//!
//! Used for native builds (where there is no browser to talk to) and by tests.

use std::collections::HashMap;

use super::traits::{PreferenceStore, SystemAppearance, ThemeSurface};
use crate::error::ThemeError;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry (does not count as a write)
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, writes: 0 }
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of `set` calls since construction
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Appearance query with a fixed answer
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedAppearance {
    pub prefers_dark: bool,
}

impl FixedAppearance {
    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }

    pub fn light() -> Self {
        Self {
            prefers_dark: false,
        }
    }
}

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// Records the root attribute and glyph text.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    root: Option<String>,
    glyph: Option<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface whose glyph starts at its markup default
    pub fn with_glyph(glyph: &str) -> Self {
        Self {
            root: None,
            glyph: Some(glyph.to_string()),
        }
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Glyph text, `None` if never set
    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }
}

impl ThemeSurface for MemorySurface {
    fn root_value(&self) -> Option<String> {
        self.root.clone()
    }

    fn set_root_value(&mut self, value: Option<&str>) -> Result<(), ThemeError> {
        self.root = value.map(str::to_string);
        Ok(())
    }

    fn set_glyph(&mut self, glyph: &str) -> Result<(), ThemeError> {
        self.glyph = Some(glyph.to_string());
        Ok(())
    }
}
