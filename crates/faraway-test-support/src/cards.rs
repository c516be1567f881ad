//! Card builders for scoring scenarios.

use faraway_scoring::domain::cards::{
    Color, NatureWonder, Region, ScoringRule, ScoringType, Shrine, TimeValue,
};
use uuid::Uuid;

/// Builds a `Region`. Defaults to a day card without hint, wonders,
/// condition or rule.
#[derive(Debug, Clone)]
pub struct RegionBuilder {
    region: Region,
}

impl RegionBuilder {
    /// Start a region with the given card number and color.
    #[must_use]
    pub fn new(number: u8, area: Color) -> Self {
        Self {
            region: Region {
                number,
                value: TimeValue::Day,
                has_hint: false,
                area,
                wonders: Vec::new(),
                condition: Vec::new(),
                scoring_rule: None,
            },
        }
    }

    /// Make it a night card.
    #[must_use]
    pub fn night(mut self) -> Self {
        self.region.value = TimeValue::Night;
        self
    }

    /// Give it a hint symbol.
    #[must_use]
    pub fn hint(mut self) -> Self {
        self.region.has_hint = true;
        self
    }

    /// Set the wonder symbols.
    #[must_use]
    pub fn wonders(mut self, wonders: &[NatureWonder]) -> Self {
        self.region.wonders = wonders.to_vec();
        self
    }

    /// Set the wonder condition.
    #[must_use]
    pub fn condition(mut self, condition: &[NatureWonder]) -> Self {
        self.region.condition = condition.to_vec();
        self
    }

    /// Attach a rule without color parameters.
    #[must_use]
    pub fn rule(mut self, kind: ScoringType, points: i32) -> Self {
        self.region.scoring_rule = Some(ScoringRule::new(kind, points));
        self
    }

    /// Finish the region.
    #[must_use]
    pub fn build(self) -> Region {
        self.region
    }
}

/// Builds a `Shrine`. Defaults to a day card without hint, wonders or
/// rule.
#[derive(Debug, Clone)]
pub struct ShrineBuilder {
    shrine: Shrine,
}

impl ShrineBuilder {
    /// Start a shrine of the given color.
    #[must_use]
    pub fn new(area: Color) -> Self {
        Self {
            shrine: Shrine {
                id: Uuid::nil(),
                value: TimeValue::Day,
                has_hint: false,
                area,
                wonders: Vec::new(),
                scoring_rule: None,
            },
        }
    }

    /// Make it a night card.
    #[must_use]
    pub fn night(mut self) -> Self {
        self.shrine.value = TimeValue::Night;
        self
    }

    /// Give it a hint symbol.
    #[must_use]
    pub fn hint(mut self) -> Self {
        self.shrine.has_hint = true;
        self
    }

    /// Set the wonder symbols.
    #[must_use]
    pub fn wonders(mut self, wonders: &[NatureWonder]) -> Self {
        self.shrine.wonders = wonders.to_vec();
        self
    }

    /// Attach a rule without color parameters.
    #[must_use]
    pub fn rule(mut self, kind: ScoringType, points: i32) -> Self {
        self.shrine.scoring_rule = Some(ScoringRule::new(kind, points));
        self
    }

    /// Attach an arbitrary rule.
    #[must_use]
    pub fn scoring_rule(mut self, rule: ScoringRule) -> Self {
        self.shrine.scoring_rule = Some(rule);
        self
    }

    /// Finish the shrine.
    #[must_use]
    pub fn build(self) -> Shrine {
        self.shrine
    }
}
