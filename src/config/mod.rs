//! Configuration management
//!
//! The toggle only needs a handful of fixed names. They are carried in one
//! struct so the UI and tests can agree on them through context.

/// localStorage key holding the persisted preference
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Attribute on the document root that styles key off (`[data-theme="dark"]`)
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// DOM id of the toggle button
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

/// Media query answering "does the system prefer dark appearance?"
pub const DEFAULT_DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_id: String,
    pub dark_media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            toggle_id: DEFAULT_TOGGLE_ID.to_string(),
            dark_media_query: DEFAULT_DARK_MEDIA_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn with_toggle_id(mut self, id: impl Into<String>) -> Self {
        self.toggle_id = id.into();
        self
    }

    pub fn with_dark_media_query(mut self, query: impl Into<String>) -> Self {
        self.dark_media_query = query.into();
        self
    }
}

/// Build version injected by build.rs
pub fn version() -> &'static str {
    env!("THEME_TOGGLE_VERSION")
}

/// Git SHA injected by build.rs
pub fn git_sha() -> &'static str {
    env!("THEME_TOGGLE_GIT_SHA")
}
