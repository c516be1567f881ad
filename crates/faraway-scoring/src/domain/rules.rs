//! Rule evaluation: the wonder condition gate and the per-type formulas.

use std::collections::BTreeMap;

use super::cards::{BASIC_COLORS, NatureWonder, ScoringRule, ScoringType};
use super::engine::ScoringError;
use super::tableau::Tableau;

/// Whether `condition` is satisfied by the wonders visible on `tableau`.
///
/// An empty condition is always met. Otherwise every required wonder kind
/// must be visible at least as often as the condition lists it.
#[must_use]
pub fn condition_met(condition: &[NatureWonder], tableau: &Tableau<'_>) -> bool {
    let mut required: BTreeMap<NatureWonder, usize> = BTreeMap::new();
    for wonder in condition {
        *required.entry(*wonder).or_default() += 1;
    }

    required
        .into_iter()
        .all(|(wonder, count)| tableau.count_wonders(wonder) >= count)
}

/// Points contributed by `rule` against the current `tableau`.
///
/// A missing rule, an unmet condition and an unknown rule type all score 0.
///
/// # Errors
///
/// Returns `ScoringError::Overflow` if a tally times the rule's points does
/// not fit in an `i32`.
pub fn evaluate_rule(
    rule: Option<&ScoringRule>,
    condition: &[NatureWonder],
    tableau: &Tableau<'_>,
) -> Result<i32, ScoringError> {
    let Some(rule) = rule else {
        return Ok(0);
    };

    if !condition_met(condition, tableau) {
        return Ok(0);
    }

    let count = match rule.kind {
        ScoringType::Flat => return Ok(rule.points),
        ScoringType::PerHint => tableau.count_hints(),
        ScoringType::PerBlueStone => tableau.count_wonders(NatureWonder::Stone),
        ScoringType::PerChimaere => tableau.count_wonders(NatureWonder::Chimera),
        ScoringType::PerDistel => tableau.count_wonders(NatureWonder::Thistle),
        ScoringType::PerNightSymbol => tableau.count_night_symbols(),
        ScoringType::PerColor => rule
            .color_one
            .map_or(0, |color| tableau.count_cards_of_color(color)),
        ScoringType::PerColorTwo => {
            rule.color_one
                .map_or(0, |color| tableau.count_cards_of_color(color))
                + rule
                    .color_two
                    .map_or(0, |color| tableau.count_cards_of_color(color))
        }
        ScoringType::PerColorSet => tableau.count_color_set(&BASIC_COLORS),
        ScoringType::Unknown => return Ok(0),
    };

    multiply(count, rule.points)
}

fn multiply(count: usize, points: i32) -> Result<i32, ScoringError> {
    i32::try_from(count)
        .ok()
        .and_then(|count| count.checked_mul(points))
        .ok_or(ScoringError::Overflow {
            stage: "applying a rule multiplier",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards::{Color, Region, Shrine, TimeValue};
    use uuid::Uuid;

    fn region(area: Color, wonders: &[NatureWonder]) -> Region {
        Region {
            number: 1,
            value: TimeValue::Day,
            has_hint: false,
            area,
            wonders: wonders.to_vec(),
            condition: Vec::new(),
            scoring_rule: None,
        }
    }

    fn shrine(area: Color, value: TimeValue, has_hint: bool, wonders: &[NatureWonder]) -> Shrine {
        Shrine {
            id: Uuid::new_v4(),
            value,
            has_hint,
            area,
            wonders: wonders.to_vec(),
            scoring_rule: None,
        }
    }

    // --- condition gate ---

    #[test]
    fn test_empty_condition_is_met() {
        let shrines: Vec<Shrine> = Vec::new();
        let tableau = Tableau::face_down(&shrines);

        assert!(condition_met(&[], &tableau));
    }

    #[test]
    fn test_condition_requires_every_wonder_kind() {
        let shrines = vec![shrine(
            Color::Gray,
            TimeValue::Day,
            false,
            &[NatureWonder::Chimera, NatureWonder::Chimera],
        )];
        let tableau = Tableau::face_down(&shrines);
        let condition = [
            NatureWonder::Chimera,
            NatureWonder::Chimera,
            NatureWonder::Thistle,
        ];

        assert!(!condition_met(&condition, &tableau));

        let thistle = region(Color::Green, &[NatureWonder::Thistle]);
        let tableau = tableau.reveal(&thistle);
        assert!(condition_met(&condition, &tableau));
    }

    #[test]
    fn test_condition_counts_repeated_requirements() {
        let stone = region(Color::Blue, &[NatureWonder::Stone]);
        let shrines: Vec<Shrine> = Vec::new();
        let tableau = Tableau::face_down(&shrines).reveal(&stone);

        assert!(condition_met(&[NatureWonder::Stone], &tableau));
        assert!(!condition_met(&[NatureWonder::Stone, NatureWonder::Stone], &tableau));
    }

    // --- rule evaluator ---

    #[test]
    fn test_missing_rule_scores_zero() {
        let shrines = vec![shrine(Color::Gray, TimeValue::Night, true, &[])];
        let tableau = Tableau::face_down(&shrines);

        assert_eq!(evaluate_rule(None, &[], &tableau).unwrap(), 0);
    }

    #[test]
    fn test_unmet_condition_scores_zero() {
        let shrines: Vec<Shrine> = Vec::new();
        let tableau = Tableau::face_down(&shrines);
        let rule = ScoringRule::new(ScoringType::Flat, 19);

        let points = evaluate_rule(Some(&rule), &[NatureWonder::Stone], &tableau).unwrap();
        assert_eq!(points, 0);
    }

    #[test]
    fn test_flat_scores_points() {
        let shrines: Vec<Shrine> = Vec::new();
        let tableau = Tableau::face_down(&shrines);
        let rule = ScoringRule::new(ScoringType::Flat, 7);

        assert_eq!(evaluate_rule(Some(&rule), &[], &tableau).unwrap(), 7);
    }

    #[test]
    fn test_per_wonder_rules_multiply_visible_wonders() {
        let shrines = vec![shrine(
            Color::Gray,
            TimeValue::Day,
            false,
            &[
                NatureWonder::Stone,
                NatureWonder::Chimera,
                NatureWonder::Thistle,
                NatureWonder::Thistle,
            ],
        )];
        let tableau = Tableau::face_down(&shrines);

        let stones = ScoringRule::new(ScoringType::PerBlueStone, 2);
        let chimeras = ScoringRule::new(ScoringType::PerChimaere, 3);
        let thistles = ScoringRule::new(ScoringType::PerDistel, 4);

        assert_eq!(evaluate_rule(Some(&stones), &[], &tableau).unwrap(), 2);
        assert_eq!(evaluate_rule(Some(&chimeras), &[], &tableau).unwrap(), 3);
        assert_eq!(evaluate_rule(Some(&thistles), &[], &tableau).unwrap(), 8);
    }

    #[test]
    fn test_per_hint_and_per_night_symbol() {
        let shrines = vec![
            shrine(Color::Gray, TimeValue::Night, true, &[]),
            shrine(Color::Gray, TimeValue::Night, false, &[]),
            shrine(Color::Gray, TimeValue::Day, true, &[]),
        ];
        let tableau = Tableau::face_down(&shrines);

        let hints = ScoringRule::new(ScoringType::PerHint, 2);
        let nights = ScoringRule::new(ScoringType::PerNightSymbol, 5);

        assert_eq!(evaluate_rule(Some(&hints), &[], &tableau).unwrap(), 4);
        assert_eq!(evaluate_rule(Some(&nights), &[], &tableau).unwrap(), 10);
    }

    #[test]
    fn test_per_color_without_color_scores_zero() {
        let shrines = vec![shrine(Color::Blue, TimeValue::Day, false, &[])];
        let tableau = Tableau::face_down(&shrines);

        let blue = ScoringRule::with_colors(ScoringType::PerColor, 3, Some(Color::Blue), None);
        let colorless = ScoringRule::new(ScoringType::PerColor, 3);

        assert_eq!(evaluate_rule(Some(&blue), &[], &tableau).unwrap(), 3);
        assert_eq!(evaluate_rule(Some(&colorless), &[], &tableau).unwrap(), 0);
    }

    #[test]
    fn test_per_color_two_treats_missing_color_as_zero() {
        let shrines = vec![
            shrine(Color::Yellow, TimeValue::Day, false, &[]),
            shrine(Color::Yellow, TimeValue::Day, false, &[]),
            shrine(Color::Red, TimeValue::Day, false, &[]),
        ];
        let tableau = Tableau::face_down(&shrines);

        let both = ScoringRule::with_colors(
            ScoringType::PerColorTwo,
            1,
            Some(Color::Yellow),
            Some(Color::Red),
        );
        let second_only =
            ScoringRule::with_colors(ScoringType::PerColorTwo, 2, None, Some(Color::Red));
        let neither = ScoringRule::new(ScoringType::PerColorTwo, 2);

        assert_eq!(evaluate_rule(Some(&both), &[], &tableau).unwrap(), 3);
        assert_eq!(evaluate_rule(Some(&second_only), &[], &tableau).unwrap(), 2);
        assert_eq!(evaluate_rule(Some(&neither), &[], &tableau).unwrap(), 0);
    }

    #[test]
    fn test_per_color_set_uses_basic_colors() {
        let shrines = vec![
            shrine(Color::Yellow, TimeValue::Day, false, &[]),
            shrine(Color::Red, TimeValue::Day, false, &[]),
            shrine(Color::Green, TimeValue::Day, false, &[]),
            shrine(Color::Green, TimeValue::Day, false, &[]),
            shrine(Color::Blue, TimeValue::Day, false, &[]),
            shrine(Color::Gray, TimeValue::Day, false, &[]),
        ];
        let tableau = Tableau::face_down(&shrines);
        let rule = ScoringRule::new(ScoringType::PerColorSet, 5);

        assert_eq!(evaluate_rule(Some(&rule), &[], &tableau).unwrap(), 5);
    }

    #[test]
    fn test_unknown_type_scores_zero() {
        let shrines = vec![shrine(Color::Gray, TimeValue::Night, true, &[NatureWonder::Stone])];
        let tableau = Tableau::face_down(&shrines);
        let rule = ScoringRule::new(ScoringType::Unknown, 100);

        assert_eq!(evaluate_rule(Some(&rule), &[], &tableau).unwrap(), 0);
    }

    #[test]
    fn test_negative_points_are_not_clamped() {
        let shrines = vec![shrine(Color::Gray, TimeValue::Night, false, &[])];
        let tableau = Tableau::face_down(&shrines);
        let rule = ScoringRule::new(ScoringType::PerNightSymbol, -3);

        assert_eq!(evaluate_rule(Some(&rule), &[], &tableau).unwrap(), -3);
    }

    #[test]
    fn test_multiplier_overflow_is_reported() {
        let shrines = vec![
            shrine(Color::Gray, TimeValue::Night, false, &[]),
            shrine(Color::Gray, TimeValue::Night, false, &[]),
        ];
        let tableau = Tableau::face_down(&shrines);
        let rule = ScoringRule::new(ScoringType::PerNightSymbol, i32::MAX);

        let result = evaluate_rule(Some(&rule), &[], &tableau);
        assert!(matches!(result, Err(ScoringError::Overflow { .. })));
    }
}
