//! Commands for the scoring context.

use chrono::{DateTime, Utc};
use faraway_core::command::Command;
use serde::Deserialize;
use uuid::Uuid;

use super::cards::{Region, Shrine};

/// A player's final tableau as entered at the end of a game.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSheet {
    /// Display name; must not be blank.
    pub name: String,
    /// Regions in the order they were placed.
    #[serde(default)]
    pub regions: Vec<Region>,
    /// Collected shrines.
    #[serde(default)]
    pub shrines: Vec<Shrine>,
}

/// Command to record a finished game.
#[derive(Debug, Clone)]
pub struct CreateGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// When the game was played; defaults to now.
    pub play_time: Option<DateTime<Utc>>,
    /// One sheet per player.
    pub players: Vec<PlayerSheet>,
}

impl Command for CreateGame {
    fn command_type(&self) -> &'static str {
        "scoring.create_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to delete a recorded game.
#[derive(Debug, Clone)]
pub struct DeleteGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game to delete.
    pub game_id: Uuid,
}

impl Command for DeleteGame {
    fn command_type(&self) -> &'static str {
        "scoring.delete_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to remove a player from a recorded game.
#[derive(Debug, Clone)]
pub struct DeletePlayer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game the player took part in.
    pub game_id: Uuid,
    /// The player to remove.
    pub player_id: Uuid,
}

impl Command for DeletePlayer {
    fn command_type(&self) -> &'static str {
        "scoring.delete_player"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
