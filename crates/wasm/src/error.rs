//! Error handling for WASM bindings.
//!
//! Converts configuration and DOM failures into JavaScript-friendly errors.

use docsite_core::ConfigError;
use std::fmt;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid configuration object or value
    Config,
    /// A DOM call threw (usually an invalid selector)
    Dom,
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct UiError {
    code: ErrorCode,
    message: String,
}

impl UiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        let code_str = match err.code {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}

/// DOM methods throw `SyntaxError`s and friends; keep their message.
impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::dom(message)
    }
}

impl From<ConfigError> for UiError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for UiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::config(format!("Invalid configuration object: {}", err))
    }
}
