//! Card data: regions, shrines and the scoring rules printed on them.

use serde::{Deserialize, Serialize};

/// Biome color printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Yellow (desert).
    Yellow,
    /// Red (canyon).
    Red,
    /// Green (forest).
    Green,
    /// Blue (river).
    Blue,
    /// Gray, the neutral color of most shrines.
    Gray,
}

/// The four basic colors a complete color set is made of. Gray is excluded.
pub const BASIC_COLORS: [Color; 4] = [Color::Yellow, Color::Red, Color::Green, Color::Blue];

/// Day or night symbol of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeValue {
    /// Day card.
    Day,
    /// Night card.
    Night,
}

/// Wonder symbol that may appear any number of times on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatureWonder {
    /// Blue stone.
    Stone,
    /// Chimera.
    Chimera,
    /// Thistle.
    Thistle,
}

/// Formula used to evaluate a scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringType {
    /// Fixed points.
    Flat,
    /// Points per hint symbol.
    PerHint,
    /// Points per blue stone.
    PerBlueStone,
    /// Points per chimera.
    PerChimaere,
    /// Points per thistle.
    PerDistel,
    /// Points per night card.
    PerNightSymbol,
    /// Points per card of `color_one`.
    PerColor,
    /// Points per card of `color_one` or `color_two`.
    PerColorTwo,
    /// Points per complete set of the four basic colors.
    PerColorSet,
    /// Any tag this build does not know. Scores nothing.
    #[serde(other)]
    Unknown,
}

/// A scoring rule printed on a region or shrine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    /// Evaluation formula.
    #[serde(rename = "type")]
    pub kind: ScoringType,
    /// Points, used as a flat value or as a multiplier.
    pub points: i32,
    /// First color parameter (`PerColor`, `PerColorTwo`).
    #[serde(default)]
    pub color_one: Option<Color>,
    /// Second color parameter (`PerColorTwo`).
    #[serde(default)]
    pub color_two: Option<Color>,
}

impl ScoringRule {
    /// A rule without color parameters.
    #[must_use]
    pub fn new(kind: ScoringType, points: i32) -> Self {
        Self {
            kind,
            points,
            color_one: None,
            color_two: None,
        }
    }

    /// A rule with color parameters.
    #[must_use]
    pub fn with_colors(
        kind: ScoringType,
        points: i32,
        color_one: Option<Color>,
        color_two: Option<Color>,
    ) -> Self {
        Self {
            kind,
            points,
            color_one,
            color_two,
        }
    }
}

/// A region card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Printed card number; has no effect on scoring.
    pub number: u8,
    /// Day or night.
    pub value: TimeValue,
    /// Whether the card shows a hint symbol.
    #[serde(default)]
    pub has_hint: bool,
    /// Card color.
    pub area: Color,
    /// Wonder symbols on the card.
    #[serde(default)]
    pub wonders: Vec<NatureWonder>,
    /// Wonders that must be visible for the rule to score. Empty means none.
    #[serde(default)]
    pub condition: Vec<NatureWonder>,
    /// Scoring rule, if the card has one.
    #[serde(default)]
    pub scoring_rule: Option<ScoringRule>,
}

/// A shrine card. Shrines are never face down and never conditioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shrine {
    /// Shrine identifier, assigned when added to a player if nil.
    #[serde(default)]
    pub id: uuid::Uuid,
    /// Day or night.
    pub value: TimeValue,
    /// Whether the card shows a hint symbol.
    #[serde(default)]
    pub has_hint: bool,
    /// Card color.
    pub area: Color,
    /// Wonder symbols on the card.
    #[serde(default)]
    pub wonders: Vec<NatureWonder>,
    /// Scoring rule, if the card has one.
    #[serde(default)]
    pub scoring_rule: Option<ScoringRule>,
}

/// Read access shared by regions and shrines for tallying.
pub trait Card {
    /// Day or night.
    fn value(&self) -> TimeValue;
    /// Whether the card shows a hint symbol.
    fn has_hint(&self) -> bool;
    /// Card color.
    fn area(&self) -> Color;
    /// Wonder symbols on the card.
    fn wonders(&self) -> &[NatureWonder];

    /// Occurrences of `wonder` on this card.
    fn wonder_count(&self, wonder: NatureWonder) -> usize {
        self.wonders().iter().filter(|w| **w == wonder).count()
    }
}

impl Card for Region {
    fn value(&self) -> TimeValue {
        self.value
    }

    fn has_hint(&self) -> bool {
        self.has_hint
    }

    fn area(&self) -> Color {
        self.area
    }

    fn wonders(&self) -> &[NatureWonder] {
        &self.wonders
    }
}

impl Card for Shrine {
    fn value(&self) -> TimeValue {
        self.value
    }

    fn has_hint(&self) -> bool {
        self.has_hint
    }

    fn area(&self) -> Color {
        self.area
    }

    fn wonders(&self) -> &[NatureWonder] {
        &self.wonders
    }
}
