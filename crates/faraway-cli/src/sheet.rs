//! JSON game sheet accepted by the scorer.

use chrono::{DateTime, Utc};
use faraway_scoring::domain::commands::{CreateGame, PlayerSheet};
use serde::Deserialize;
use uuid::Uuid;

/// A finished game as written down by the players.
#[derive(Debug, Deserialize)]
pub struct GameSheet {
    /// When the game was played; defaults to now.
    #[serde(default)]
    pub play_time: Option<DateTime<Utc>>,
    /// One sheet per player.
    pub players: Vec<PlayerSheet>,
}

impl GameSheet {
    /// Converts the sheet into a `CreateGame` command.
    #[must_use]
    pub fn into_command(self, correlation_id: Uuid) -> CreateGame {
        CreateGame {
            correlation_id,
            play_time: self.play_time,
            players: self.players,
        }
    }
}
