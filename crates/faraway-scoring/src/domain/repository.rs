//! Game repository abstraction.

use async_trait::async_trait;
use faraway_core::error::DomainError;
use uuid::Uuid;

use super::game::Game;

/// Repository trait for loading and storing recorded games.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Load a game, or `None` if it does not exist.
    async fn load_game(&self, game_id: Uuid) -> Result<Option<Game>, DomainError>;

    /// Load every recorded game, oldest play time first.
    async fn list_games(&self) -> Result<Vec<Game>, DomainError>;

    /// Insert or replace a game.
    async fn save_game(&self, game: &Game) -> Result<(), DomainError>;

    /// Remove a game. Removing an unknown game succeeds.
    async fn delete_game(&self, game_id: Uuid) -> Result<(), DomainError>;
}
