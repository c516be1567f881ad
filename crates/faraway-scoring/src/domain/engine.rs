//! Score engine.
//!
//! Regions are placed face down and revealed from the last placed to the
//! first. Each region is scored right after it turns face up, against the
//! regions revealed so far and every shrine. Shrines are scored last, once
//! the whole tableau is visible.

use serde::Serialize;
use thiserror::Error;
use tracing::{trace, warn};
use uuid::Uuid;

use super::player::Player;
use super::rules::evaluate_rule;
use super::tableau::Tableau;

/// Faults raised while computing a score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// An intermediate value did not fit in an `i32`.
    #[error("score overflow while {stage}")]
    Overflow {
        /// The step that overflowed.
        stage: &'static str,
    },
}

/// Final score of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    /// The scored player.
    pub player_id: Uuid,
    /// The player's display name.
    pub player_name: String,
    /// Points, or 0 if the computation faulted.
    pub points: i32,
    /// Whether the computation faulted and `points` is a placeholder.
    pub faulted: bool,
}

fn accumulate(total: i32, points: i32) -> Result<i32, ScoringError> {
    total.checked_add(points).ok_or(ScoringError::Overflow {
        stage: "summing rule contributions",
    })
}

/// Computes a player's score by revealing regions last to first.
///
/// The snapshot is not modified; visibility is carried through the fold, so
/// stored face-up flags have no influence on the result.
///
/// # Errors
///
/// Returns `ScoringError::Overflow` if any contribution or the running total
/// overflows.
pub fn compute_player_score(player: &Player) -> Result<i32, ScoringError> {
    let shrines = player.shrines();
    let placed = player.regions();

    let (tableau, total) = placed.iter().rev().try_fold(
        (Tableau::face_down(shrines), 0_i32),
        |(tableau, total), entry| {
            let region = &entry.region;
            let tableau = tableau.reveal(region);
            let points = evaluate_rule(region.scoring_rule.as_ref(), &region.condition, &tableau)?;
            trace!(position = entry.position, points, "region revealed");
            Ok::<_, ScoringError>((tableau, accumulate(total, points)?))
        },
    )?;

    shrines.iter().try_fold(total, |total, shrine| {
        let points = evaluate_rule(shrine.scoring_rule.as_ref(), &[], &tableau)?;
        accumulate(total, points)
    })
}

/// Scores a player, reporting a fault as 0 points flagged `faulted`.
#[must_use]
pub fn score_player(player: &Player) -> PlayerScore {
    let (points, faulted) = match compute_player_score(player) {
        Ok(points) => (points, false),
        Err(error) => {
            warn!(
                player_id = %player.id,
                player_name = %player.name,
                %error,
                "score computation failed, reporting 0"
            );
            (0, true)
        }
    };

    PlayerScore {
        player_id: player.id,
        player_name: player.name.clone(),
        points,
        faulted,
    }
}
