//! Error types for tarifador

use crate::shipping::ValidationError;
use thiserror::Error;

/// Main error type for tarifador operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid shipping configuration: {}", format_validation_errors(.0))]
    InvalidShippingConfig(Vec<ValidationError>),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for tarifador operations
pub type Result<T> = std::result::Result<T, Error>;
