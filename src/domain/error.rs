//! Domain error types

use thiserror::Error;

/// Errors raised outside the pure signal library (config, figure output, CLI)
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown lesson '{0}'")]
    UnknownLesson(String),

    #[error("Invalid figure name '{0}'")]
    InvalidFigureName(String),
}

/// Result type alias for lesson and output operations
pub type SignalResult<T> = Result<T, SignalError>;
