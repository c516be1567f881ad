//! The game aggregate and winner determination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::engine::{PlayerScore, score_player};
use super::player::Player;

/// A recorded game: when it was played and the final tableau of each player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Aggregate identifier.
    pub id: Uuid,
    /// When the game was played.
    pub play_time: DateTime<Utc>,
    /// Participating players.
    pub players: Vec<Player>,
}

/// Scores of every player plus those holding the top score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameScore {
    /// One entry per player, in player order.
    pub player_scores: Vec<PlayerScore>,
    /// Every player whose score equals the maximum.
    pub winners: Vec<PlayerScore>,
}

impl Game {
    /// Creates a game without players.
    #[must_use]
    pub fn new(id: Uuid, play_time: DateTime<Utc>) -> Self {
        Self {
            id,
            play_time,
            players: Vec::new(),
        }
    }

    /// Looks up a player by identifier.
    #[must_use]
    pub fn player(&self, player_id: Uuid) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }

    /// Removes a player from the game. Returns whether the player was present.
    pub fn remove_player(&mut self, player_id: Uuid) -> bool {
        let before = self.players.len();
        self.players.retain(|player| player.id != player_id);
        self.players.len() != before
    }

    /// Scores every player and determines the winners.
    ///
    /// A player whose computation faults is reported with 0 points and does
    /// not prevent the others from being scored.
    #[must_use]
    pub fn score(&self) -> GameScore {
        determine_winners(self.players.iter().map(score_player).collect())
    }
}

/// Splits out every score equal to the maximum. Ties produce several winners.
#[must_use]
pub fn determine_winners(player_scores: Vec<PlayerScore>) -> GameScore {
    let Some(max_points) = player_scores.iter().map(|score| score.points).max() else {
        return GameScore {
            player_scores,
            winners: Vec::new(),
        };
    };

    let winners = player_scores
        .iter()
        .filter(|score| score.points == max_points)
        .cloned()
        .collect();

    GameScore {
        player_scores,
        winners,
    }
}
