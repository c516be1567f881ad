//! Configuration read from the command line and environment.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CliError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Multi-line human-readable output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(CliError::Config(format!(
                "FARAWAY_LOG_FORMAT must be 'json' or 'pretty', got '{other}'"
            ))),
        }
    }
}

/// Scorer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON game sheet.
    pub sheet_path: PathBuf,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the configuration from process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the sheet path is missing or
    /// `FARAWAY_LOG_FORMAT` is not a known format.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_sources(
            std::env::args().skip(1),
            std::env::var("FARAWAY_LOG_FORMAT").ok(),
        )
    }

    /// Builds the configuration from positional arguments and the raw
    /// `FARAWAY_LOG_FORMAT` value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the sheet path is missing or the log
    /// format is not a known format.
    pub fn from_sources(
        args: impl IntoIterator<Item = String>,
        log_format: Option<String>,
    ) -> Result<Self, CliError> {
        let sheet_path = args
            .into_iter()
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| CliError::Config("usage: faraway-score <game-sheet.json>".to_owned()))?;

        let log_format = log_format
            .as_deref()
            .map_or(Ok(LogFormat::Json), LogFormat::from_str)?;

        Ok(Self {
            sheet_path,
            log_format,
        })
    }
}
