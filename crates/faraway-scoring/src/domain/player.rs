//! A player's tableau: positioned regions and collected shrines.

use faraway_core::error::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards::{Region, Shrine};

/// Maximum number of regions a player places during a game.
pub const MAX_REGIONS: usize = 8;

/// A region placed by a player at a given position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegion {
    /// Placement identifier.
    pub id: Uuid,
    /// The placed card.
    pub region: Region,
    /// 1-based placement order.
    pub position: u8,
    /// Stored display state. Scoring ignores it.
    pub is_face_up: bool,
}

/// A player snapshot as handed to the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    regions: Vec<PlayerRegion>,
    shrines: Vec<Shrine>,
}

impl Player {
    /// Creates a player with an empty tableau.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            regions: Vec::new(),
            shrines: Vec::new(),
        }
    }

    /// Places `region` after the regions already placed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the player already placed
    /// `MAX_REGIONS` regions.
    pub fn add_region(&mut self, region: Region) -> Result<(), DomainError> {
        if self.regions.len() >= MAX_REGIONS {
            return Err(DomainError::Validation(
                "a player may place at most 8 regions".to_owned(),
            ));
        }

        // Bounded by MAX_REGIONS above.
        #[allow(clippy::cast_possible_truncation)]
        let position = self.regions.len() as u8 + 1;

        self.regions.push(PlayerRegion {
            id: Uuid::new_v4(),
            region,
            position,
            is_face_up: false,
        });
        Ok(())
    }

    /// Adds a shrine, assigning it an identifier if it has none.
    pub fn add_shrine(&mut self, mut shrine: Shrine) {
        if shrine.id.is_nil() {
            shrine.id = Uuid::new_v4();
        }
        self.shrines.push(shrine);
    }

    /// Placed regions ordered by position.
    #[must_use]
    pub fn regions(&self) -> Vec<&PlayerRegion> {
        let mut ordered: Vec<&PlayerRegion> = self.regions.iter().collect();
        ordered.sort_by_key(|placed| placed.position);
        ordered
    }

    /// Mutable access to placed regions, in insertion order.
    #[cfg(test)]
    pub(crate) fn regions_mut(&mut self) -> &mut [PlayerRegion] {
        &mut self.regions
    }

    /// Collected shrines.
    #[must_use]
    pub fn shrines(&self) -> &[Shrine] {
        &self.shrines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{Color, TimeValue};

    fn region(number: u8) -> Region {
        Region {
            number,
            value: TimeValue::Day,
            has_hint: false,
            area: Color::Green,
            wonders: Vec::new(),
            condition: Vec::new(),
            scoring_rule: None,
        }
    }

    #[test]
    fn test_add_region_assigns_sequential_positions() {
        let mut player = Player::new("Alice");
        player.add_region(region(10)).unwrap();
        player.add_region(region(20)).unwrap();
        player.add_region(region(30)).unwrap();

        let positions: Vec<u8> = player.regions().iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(player.regions()[2].region.number, 30);
    }

    #[test]
    fn test_add_region_places_region_face_down() {
        let mut player = Player::new("Alice");
        player.add_region(region(4)).unwrap();

        assert!(!player.regions()[0].is_face_up);
    }

    #[test]
    fn test_add_region_rejects_ninth_region() {
        let mut player = Player::new("Alice");
        for number in 1..=8 {
            player.add_region(region(number)).unwrap();
        }

        let result = player.add_region(region(9));

        match result.unwrap_err() {
            DomainError::Validation(msg) => {
                assert_eq!(msg, "a player may place at most 8 regions");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(player.regions().len(), 8);
    }

    #[test]
    fn test_add_shrine_assigns_id_when_nil() {
        let mut player = Player::new("Bob");
        player.add_shrine(Shrine {
            id: Uuid::nil(),
            value: TimeValue::Night,
            has_hint: true,
            area: Color::Green,
            wonders: Vec::new(),
            scoring_rule: None,
        });

        assert_eq!(player.shrines().len(), 1);
        assert!(!player.shrines()[0].id.is_nil());
        assert_eq!(player.shrines()[0].area, Color::Green);
        assert!(player.shrines()[0].has_hint);
    }

    #[test]
    fn test_regions_are_ordered_by_position() {
        let mut player = Player::new("Carol");
        player.add_region(region(1)).unwrap();
        player.add_region(region(2)).unwrap();
        player.regions_mut().swap(0, 1);

        let numbers: Vec<u8> = player.regions().iter().map(|r| r.region.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
