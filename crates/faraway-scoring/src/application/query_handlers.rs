//! Query handlers for the scoring context.
//!
//! This module contains query handlers that load games from the repository
//! and return read-only view DTOs.

use chrono::{DateTime, Utc};
use faraway_core::error::DomainError;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::cards::{Region, Shrine};
use crate::domain::engine::{PlayerScore, score_player};
use crate::domain::game::{Game, GameScore};
use crate::domain::player::Player;
use crate::domain::repository::GameRepository;

/// Read-only view of a placed region.
#[derive(Debug, Serialize)]
pub struct RegionView {
    /// Placement order.
    pub position: u8,
    /// Stored display state.
    pub is_face_up: bool,
    /// The card.
    #[serde(flatten)]
    pub region: Region,
}

/// Read-only view of a player's tableau.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    /// The player identifier.
    pub player_id: Uuid,
    /// Display name.
    pub name: String,
    /// Regions ordered by position.
    pub regions: Vec<RegionView>,
    /// Collected shrines.
    pub shrines: Vec<Shrine>,
}

/// Read-only view of a recorded game.
#[derive(Debug, Serialize)]
pub struct GameView {
    /// The game identifier.
    pub game_id: Uuid,
    /// When the game was played.
    pub play_time: DateTime<Utc>,
    /// Participating players.
    pub players: Vec<PlayerView>,
}

/// Read-only view of one player's score.
#[derive(Debug, Serialize)]
pub struct PlayerScoreView {
    /// The player identifier.
    pub player_id: Uuid,
    /// Display name.
    pub player_name: String,
    /// Final score.
    pub points: i32,
    /// Whether the score is a placeholder for a failed computation.
    pub faulted: bool,
}

/// Read-only view of a game's scores and winners.
#[derive(Debug, Serialize)]
pub struct GameScoreView {
    /// The game identifier.
    pub game_id: Uuid,
    /// One entry per player.
    pub player_scores: Vec<PlayerScoreView>,
    /// Players holding the top score.
    pub winners: Vec<PlayerScoreView>,
}

impl From<PlayerScore> for PlayerScoreView {
    fn from(score: PlayerScore) -> Self {
        Self {
            player_id: score.player_id,
            player_name: score.player_name,
            points: score.points,
            faulted: score.faulted,
        }
    }
}

fn player_view(player: &Player) -> PlayerView {
    PlayerView {
        player_id: player.id,
        name: player.name.clone(),
        regions: player
            .regions()
            .into_iter()
            .map(|placed| RegionView {
                position: placed.position,
                is_face_up: placed.is_face_up,
                region: placed.region.clone(),
            })
            .collect(),
        shrines: player.shrines().to_vec(),
    }
}

fn game_view(game: &Game) -> GameView {
    GameView {
        game_id: game.id,
        play_time: game.play_time,
        players: game.players.iter().map(player_view).collect(),
    }
}

async fn load_existing_game(game_id: Uuid, repo: &dyn GameRepository) -> Result<Game, DomainError> {
    repo.load_game(game_id)
        .await?
        .ok_or(DomainError::AggregateNotFound(game_id))
}

/// Lists every recorded game.
///
/// # Errors
///
/// Returns the repository error if loading fails.
#[instrument(skip(repo))]
pub async fn list_games(repo: &dyn GameRepository) -> Result<Vec<GameView>, DomainError> {
    let games = repo.list_games().await?;
    Ok(games.iter().map(game_view).collect())
}

/// Retrieves a game by its aggregate ID.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no game exists for the ID.
#[instrument(skip(repo))]
pub async fn get_game_by_id(
    game_id: Uuid,
    repo: &dyn GameRepository,
) -> Result<GameView, DomainError> {
    let game = load_existing_game(game_id, repo).await?;
    Ok(game_view(&game))
}

/// Scores every player of a game and reports the winners.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no game exists for the ID.
#[instrument(skip(repo))]
pub async fn get_game_score(
    game_id: Uuid,
    repo: &dyn GameRepository,
) -> Result<GameScoreView, DomainError> {
    let game = load_existing_game(game_id, repo).await?;
    let GameScore {
        player_scores,
        winners,
    } = game.score();

    Ok(GameScoreView {
        game_id,
        player_scores: player_scores.into_iter().map(Into::into).collect(),
        winners: winners.into_iter().map(Into::into).collect(),
    })
}

/// Scores a single player of a game.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` with the game ID if the game
/// does not exist, or with the player ID if the player is not part of it.
#[instrument(skip(repo))]
pub async fn get_player_score(
    game_id: Uuid,
    player_id: Uuid,
    repo: &dyn GameRepository,
) -> Result<PlayerScoreView, DomainError> {
    let game = load_existing_game(game_id, repo).await?;
    let player = game
        .player(player_id)
        .ok_or(DomainError::AggregateNotFound(player_id))?;

    Ok(score_player(player).into())
}

/// Lists the players of every recorded game, game by game.
///
/// # Errors
///
/// Returns the repository error if loading fails.
#[instrument(skip(repo))]
pub async fn list_players(repo: &dyn GameRepository) -> Result<Vec<PlayerView>, DomainError> {
    let games = repo.list_games().await?;
    Ok(games
        .iter()
        .flat_map(|game| game.players.iter().map(player_view))
        .collect())
}

/// Retrieves one player's tableau.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` with the game ID if the game
/// does not exist, or with the player ID if the player is not part of it.
#[instrument(skip(repo))]
pub async fn get_player(
    game_id: Uuid,
    player_id: Uuid,
    repo: &dyn GameRepository,
) -> Result<PlayerView, DomainError> {
    let game = load_existing_game(game_id, repo).await?;
    game.player(player_id)
        .map(player_view)
        .ok_or(DomainError::AggregateNotFound(player_id))
}
