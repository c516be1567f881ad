//! Test repositories: mock `GameRepository` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use faraway_core::error::DomainError;
use faraway_scoring::domain::game::Game;
use faraway_scoring::domain::repository::GameRepository;
use uuid::Uuid;

/// A game repository that serves preloaded games and records every save
/// and delete.
#[derive(Debug, Default)]
pub struct RecordingGameRepository {
    games: Mutex<HashMap<Uuid, Game>>,
    saved: Mutex<Vec<Game>>,
    deleted: Mutex<Vec<Uuid>>,
}

impl RecordingGameRepository {
    /// Create an empty recording repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording repository that already holds `game`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_game(game: Game) -> Self {
        let repo = Self::default();
        repo.games.lock().unwrap().insert(game.id, game);
        repo
    }

    /// Returns a snapshot of all games that were saved.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_games(&self) -> Vec<Game> {
        self.saved.lock().unwrap().clone()
    }

    /// Returns the IDs passed to `delete_game`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn deleted_ids(&self) -> Vec<Uuid> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl GameRepository for RecordingGameRepository {
    async fn load_game(&self, game_id: Uuid) -> Result<Option<Game>, DomainError> {
        Ok(self.games.lock().unwrap().get(&game_id).cloned())
    }

    async fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self.games.lock().unwrap().values().cloned().collect();
        games.sort_by_key(|game| game.play_time);
        Ok(games)
    }

    async fn save_game(&self, game: &Game) -> Result<(), DomainError> {
        self.games.lock().unwrap().insert(game.id, game.clone());
        self.saved.lock().unwrap().push(game.clone());
        Ok(())
    }

    async fn delete_game(&self, game_id: Uuid) -> Result<(), DomainError> {
        self.games.lock().unwrap().remove(&game_id);
        self.deleted.lock().unwrap().push(game_id);
        Ok(())
    }
}

/// A game repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingGameRepository;

#[async_trait]
impl GameRepository for FailingGameRepository {
    async fn load_game(&self, _game_id: Uuid) -> Result<Option<Game>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_games(&self) -> Result<Vec<Game>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save_game(&self, _game: &Game) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn delete_game(&self, _game_id: Uuid) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
