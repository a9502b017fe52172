//! Error types for the browser side of the song page
//!
//! None of these reach the reader of the page: the adapter logs them and
//! carries on with whatever it could render.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum PageError {
    /// No `window` or `document` (e.g. running in a worker)
    #[error("browser context unavailable: {0}")]
    NoBrowser(&'static str),

    /// A required element is not on the page
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
