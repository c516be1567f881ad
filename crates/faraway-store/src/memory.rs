//! Process-local `GameRepository` backed by a map behind an async lock.

use std::collections::HashMap;

use async_trait::async_trait;
use faraway_core::error::DomainError;
use faraway_scoring::domain::game::Game;
use faraway_scoring::domain::repository::GameRepository;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Stores games in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<Uuid, Game>>,
}

impl InMemoryGameRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn load_game(&self, game_id: Uuid) -> Result<Option<Game>, DomainError> {
        Ok(self.games.read().await.get(&game_id).cloned())
    }

    async fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self.games.read().await.values().cloned().collect();
        games.sort_by_key(|game| game.play_time);
        Ok(games)
    }

    async fn save_game(&self, game: &Game) -> Result<(), DomainError> {
        self.games.write().await.insert(game.id, game.clone());
        debug!(game_id = %game.id, "game stored");
        Ok(())
    }

    async fn delete_game(&self, game_id: Uuid) -> Result<(), DomainError> {
        if self.games.write().await.remove(&game_id).is_some() {
            debug!(%game_id, "game removed");
        }
        Ok(())
    }
}
