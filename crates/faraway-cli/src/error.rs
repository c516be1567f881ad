//! Faraway CLI error types.

use faraway_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the command-line scorer.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required argument or environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The game sheet could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The game sheet is not valid JSON or the report could not be encoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The game was rejected by the scoring context.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
