//! Faraway score tracker: command-line scorer.
//!
//! Reads a finished game from a JSON sheet, records it and reports every
//! player's score and the winners.

pub mod config;
pub mod error;
pub mod sheet;

use faraway_core::clock::SystemClock;
use faraway_scoring::application::command_handlers;
use faraway_scoring::application::query_handlers::{self, GameScoreView};
use faraway_store::InMemoryGameRepository;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::error::CliError;
use crate::sheet::GameSheet;

/// Loads the configured sheet, records the game and scores it.
///
/// # Errors
///
/// Returns `CliError` if the sheet cannot be read or parsed, or if the game
/// fails validation.
pub async fn run(config: &Config) -> Result<GameScoreView, CliError> {
    let contents = tokio::fs::read_to_string(&config.sheet_path).await?;
    let sheet: GameSheet = serde_json::from_str(&contents)?;

    let repo = InMemoryGameRepository::new();
    let command = sheet.into_command(Uuid::new_v4());
    info!(
        correlation_id = %command.correlation_id,
        path = %config.sheet_path.display(),
        "scoring game sheet"
    );

    let game_id = command_handlers::handle_create_game(&command, &SystemClock, &repo).await?;
    let view = query_handlers::get_game_score(game_id, &repo).await?;
    Ok(view)
}
