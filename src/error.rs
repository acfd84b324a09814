//! Error type for host failures (storage, DOM).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// No `window`, or the browser refused access to `localStorage`.
    #[error("persistent storage is unavailable")]
    StorageUnavailable,

    #[error("storage operation failed: {0}")]
    Storage(String),

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl ThemeError {
    pub(crate) fn storage(err: wasm_bindgen::JsValue) -> Self {
        ThemeError::Storage(format!("{:?}", err))
    }

    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        ThemeError::Dom(format!("{:?}", err))
    }
}
