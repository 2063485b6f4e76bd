//! Error Types
//!
//! Failures surfaced by form input handling and the record library.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors from a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordsError {
    #[error("record library is not ready yet")]
    NotReady,
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("field `{0}` does not hold a valid whole number")]
    InvalidField(&'static str),
    #[error("failed to initialize record library: {0}")]
    Init(String),
    /// The call threw or its promise rejected
    #[error("record library call failed: {0}")]
    Rejected(String),
    /// The library answered with an error message
    #[error("{0}")]
    Library(String),
}

/// Errors from converting raw input text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("`{field}` expects a non-negative whole number, got {raw:?}")]
    InvalidBound { field: &'static str, raw: String },
}

/// Best-effort readable message for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
