//! Command handlers for the scoring context.
//!
//! This module contains application-level command handler functions that
//! validate input, build the game aggregate and persist it.

use faraway_core::clock::Clock;
use faraway_core::command::Command;
use faraway_core::error::DomainError;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::commands::{CreateGame, DeleteGame, DeletePlayer, PlayerSheet};
use crate::domain::game::Game;
use crate::domain::player::{MAX_REGIONS, Player};
use crate::domain::repository::GameRepository;

/// Fewest players a recorded game may have.
pub const MIN_PLAYERS: usize = 1;

/// Most players a recorded game may have.
pub const MAX_PLAYERS: usize = 6;

/// Builds a player from its sheet, placing regions in the listed order.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the name is blank or the sheet lists
/// more than `MAX_REGIONS` regions.
pub(crate) fn build_player(sheet: &PlayerSheet) -> Result<Player, DomainError> {
    if sheet.name.trim().is_empty() {
        return Err(DomainError::Validation(
            "every player needs a name".to_owned(),
        ));
    }

    if sheet.regions.len() > MAX_REGIONS {
        return Err(DomainError::Validation(format!(
            "player '{}': at most {MAX_REGIONS} regions",
            sheet.name
        )));
    }

    let mut player = Player::new(sheet.name.clone());
    for region in &sheet.regions {
        player.add_region(region.clone())?;
    }
    for shrine in &sheet.shrines {
        player.add_shrine(shrine.clone());
    }
    Ok(player)
}

/// Handles the `CreateGame` command: validates the player sheets, builds
/// the game and saves it.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the player count is outside
/// `MIN_PLAYERS..=MAX_PLAYERS` or a sheet is invalid, or the repository
/// error if saving fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id()))]
pub async fn handle_create_game(
    command: &CreateGame,
    clock: &dyn Clock,
    repo: &dyn GameRepository,
) -> Result<Uuid, DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&command.players.len()) {
        return Err(DomainError::Validation(format!(
            "a game needs between {MIN_PLAYERS} and {MAX_PLAYERS} players"
        )));
    }

    let players = command
        .players
        .iter()
        .map(build_player)
        .collect::<Result<Vec<_>, _>>()?;

    let game = Game {
        id: Uuid::new_v4(),
        play_time: command.play_time.unwrap_or_else(|| clock.now()),
        players,
    };

    repo.save_game(&game).await?;

    info!(
        command_type = command.command_type(),
        game_id = %game.id,
        players = game.players.len(),
        "game recorded"
    );

    Ok(game.id)
}

/// Handles the `DeleteGame` command. Deleting an unknown game succeeds.
///
/// # Errors
///
/// Returns the repository error if deletion fails.
#[instrument(skip_all, fields(correlation_id = %command.correlation_id(), game_id = %command.game_id))]
pub async fn handle_delete_game(
    command: &DeleteGame,
    repo: &dyn GameRepository,
) -> Result<(), DomainError> {
    repo.delete_game(command.game_id).await?;
    info!(command_type = command.command_type(), "game deleted");
    Ok(())
}

/// Handles the `DeletePlayer` command: removes the player from its game and
/// saves the game. An unknown game or player is not an error.
///
/// # Errors
///
/// Returns the repository error if loading or saving fails.
#[instrument(
    skip_all,
    fields(
        correlation_id = %command.correlation_id(),
        game_id = %command.game_id,
        player_id = %command.player_id
    )
)]
pub async fn handle_delete_player(
    command: &DeletePlayer,
    repo: &dyn GameRepository,
) -> Result<(), DomainError> {
    let Some(mut game) = repo.load_game(command.game_id).await? else {
        debug!("game not found, nothing to delete");
        return Ok(());
    };

    if !game.remove_player(command.player_id) {
        debug!("player not found, nothing to delete");
        return Ok(());
    }

    repo.save_game(&game).await?;
    info!(
        command_type = command.command_type(),
        remaining = game.players.len(),
        "player deleted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{Color, Region, Shrine, TimeValue};

    fn region(number: u8) -> Region {
        Region {
            number,
            value: TimeValue::Day,
            has_hint: false,
            area: Color::Red,
            wonders: Vec::new(),
            condition: Vec::new(),
            scoring_rule: None,
        }
    }

    fn sheet(name: &str, regions: usize) -> PlayerSheet {
        PlayerSheet {
            name: name.to_owned(),
            regions: (1..=regions)
                .map(|n| region(u8::try_from(n).unwrap()))
                .collect(),
            shrines: vec![Shrine {
                id: Uuid::nil(),
                value: TimeValue::Night,
                has_hint: false,
                area: Color::Gray,
                wonders: Vec::new(),
                scoring_rule: None,
            }],
        }
    }

    #[test]
    fn test_build_player_places_regions_in_order() {
        let player = build_player(&sheet("Alice", 3)).unwrap();

        let placed: Vec<(u8, u8)> = player
            .regions()
            .iter()
            .map(|r| (r.position, r.region.number))
            .collect();
        assert_eq!(placed, vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(player.shrines().len(), 1);
        assert!(!player.shrines()[0].id.is_nil());
    }

    #[test]
    fn test_build_player_rejects_blank_name() {
        let result = build_player(&sheet("   ", 1));

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert_eq!(msg, "every player needs a name"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_build_player_rejects_more_than_eight_regions() {
        let result = build_player(&sheet("Bob", 9));

        match result.unwrap_err() {
            DomainError::Validation(msg) => assert_eq!(msg, "player 'Bob': at most 8 regions"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_build_player_accepts_exactly_eight_regions() {
        let player = build_player(&sheet("Carol", 8)).unwrap();

        assert_eq!(player.regions().len(), 8);
    }
}
