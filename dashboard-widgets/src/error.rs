//! Error handling

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::logic::threat::{FetchError, TopologyError};

pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// No `window` (not running in a browser)
    #[error("no window available")]
    NoWindow,

    /// No `document` on the window
    #[error("no document available")]
    NoDocument,

    /// An element exists but is not the expected kind
    #[error("element '{0}' has an unexpected type")]
    WrongElementType(&'static str),

    /// Canvas 2D context could not be obtained
    #[error("2d canvas context unavailable")]
    NoCanvasContext,

    /// Exception thrown by a browser API
    #[error("javascript error: {0}")]
    Js(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Js(message)
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        WidgetError::Config(err.to_string())
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
