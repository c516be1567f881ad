//! Faraway score tracker: command-line entry point.

use std::error::Error;

use faraway_cli::config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the score report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    tracing::info!("Starting Faraway scorer");

    let report = faraway_cli::run(&config).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
