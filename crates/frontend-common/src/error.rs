//! Errors raised by browser APIs

use gloo::storage::errors::StorageError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BrowserError {
    /// A DOM or window call threw
    #[error("browser call failed: {0}")]
    Js(String),

    /// Element expected on the page is missing
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
