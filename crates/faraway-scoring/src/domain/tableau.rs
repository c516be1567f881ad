//! Visible tableau and the tallies scoring rules are computed from.
//!
//! A `Tableau` holds the regions revealed so far plus every shrine. Shrines
//! always count; regions count only once revealed. All tallies read the
//! current state, so the same query returns larger values as the reveal
//! proceeds.

use super::cards::{Card, Color, NatureWonder, Region, Shrine, TimeValue};

/// Cards currently visible to the rule evaluator.
#[derive(Debug, Clone)]
pub struct Tableau<'a> {
    visible: Vec<&'a Region>,
    shrines: &'a [Shrine],
}

impl<'a> Tableau<'a> {
    /// A tableau with every region still face down.
    #[must_use]
    pub fn face_down(shrines: &'a [Shrine]) -> Self {
        Self {
            visible: Vec::new(),
            shrines,
        }
    }

    /// Returns the tableau with `region` turned face up.
    #[must_use]
    pub fn reveal(mut self, region: &'a Region) -> Self {
        self.visible.push(region);
        self
    }

    /// Regions revealed so far, most recently revealed last.
    #[must_use]
    pub fn visible_regions(&self) -> &[&'a Region] {
        &self.visible
    }

    fn count_where(&self, matches: impl Fn(&dyn Card) -> bool) -> usize {
        self.visible.iter().filter(|region| matches(**region)).count()
            + self.shrines.iter().filter(|shrine| matches(*shrine)).count()
    }

    fn sum_over(&self, tally: impl Fn(&dyn Card) -> usize) -> usize {
        self.visible.iter().map(|region| tally(*region)).sum::<usize>()
            + self.shrines.iter().map(|shrine| tally(shrine)).sum::<usize>()
    }

    /// Visible cards showing a hint symbol.
    #[must_use]
    pub fn count_hints(&self) -> usize {
        self.count_where(|card| card.has_hint())
    }

    /// Visible night cards.
    #[must_use]
    pub fn count_night_symbols(&self) -> usize {
        self.count_where(|card| card.value() == TimeValue::Night)
    }

    /// Occurrences of `wonder` across all visible cards.
    #[must_use]
    pub fn count_wonders(&self, wonder: NatureWonder) -> usize {
        self.sum_over(|card| card.wonder_count(wonder))
    }

    /// Visible cards of `color`.
    #[must_use]
    pub fn count_cards_of_color(&self, color: Color) -> usize {
        self.count_where(|card| card.area() == color)
    }

    /// Complete sets over `colors`: the smallest per-color count, or 0 for
    /// an empty list.
    #[must_use]
    pub fn count_color_set(&self, colors: &[Color]) -> usize {
        colors
            .iter()
            .map(|color| self.count_cards_of_color(*color))
            .min()
            .unwrap_or(0)
    }
}
