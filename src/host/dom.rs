//! Browser host bindings (WASM only): localStorage, matchMedia, document root.

use super::traits::{PreferenceStore, SystemAppearance};
use crate::error::ThemeError;

/// `window.localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(ThemeError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage.get_item(key).map_err(ThemeError::storage)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(ThemeError::storage)
    }
}

/// `window.matchMedia(query).matches`
pub struct MediaQueryAppearance {
    query: String,
}

impl MediaQueryAppearance {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl SystemAppearance for MediaQueryAppearance {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(&self.query).ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }
}

fn document_root() -> Result<web_sys::Element, ThemeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| ThemeError::MissingElement("documentElement".to_string()))
}

pub fn root_attribute(name: &str) -> Option<String> {
    document_root().ok().and_then(|root| root.get_attribute(name))
}

/// Set the root attribute, or remove it when `value` is `None`.
pub fn set_root_attribute(name: &str, value: Option<&str>) -> Result<(), ThemeError> {
    let root = document_root()?;
    match value {
        Some(value) => root.set_attribute(name, value).map_err(ThemeError::dom),
        None => root.remove_attribute(name).map_err(ThemeError::dom),
    }
}
