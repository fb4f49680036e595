//! Error types for configuring the page behaviors.
//!
//! Runtime problems on the page (missing elements, bad links, clipboard
//! failures) are not errors at this level: they degrade one feature and are
//! reported through `log`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: '{field}' must not be empty")]
    Empty { field: &'static str },

    #[error("Configuration error: class name '{value}' for '{field}' contains whitespace")]
    InvalidClassName { field: &'static str, value: String },

    #[error("Configuration error: '{field}' must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
