//! Error Types
//!
//! Failures of the draft persistence layer.

use thiserror::Error;

/// Errors raised while talking to the key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    /// No `window` object (not running in a browser)
    #[error("browser window is not available")]
    NoWindow,

    /// `window.localStorage` is disabled or threw on access
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected a write (quota exceeded, private mode, ...)
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },

    /// The draft could not be encoded as JSON
    #[error("failed to encode draft: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Format a JS exception for an error message
pub fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
