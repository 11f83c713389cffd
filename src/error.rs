//! Error types for Startup Predictor

use thiserror::Error;

/// Errors that can occur around a prediction.
///
/// Scoring and forecasting themselves are total; these come from parsing,
/// validation, configuration and encoding.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse profile payload: {0}")]
    ParseError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
