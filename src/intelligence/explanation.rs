// ABOUTME: Natural-language notes explaining a meal's calorie, protein, and macro sub-scores
// ABOUTME: Produces exactly one note per category in calorie, protein, macro order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::scoring::{ExplanationThresholds, MacroRanges, MacroStatus};

/// Calorie fractions of a meal, one per macro
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroPercentages {
    /// Protein share of meal calories
    pub protein: f64,
    /// Fat share of meal calories
    pub fat: f64,
    /// Carbohydrate share of meal calories
    pub carbs: f64,
}

/// Wording tier picked from a sub-score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Positive,
    Neutral,
    Negative,
}

impl Tier {
    fn for_score(score: f64, thresholds: &ExplanationThresholds) -> Self {
        if score >= thresholds.positive {
            Self::Positive
        } else if score >= thresholds.neutral {
            Self::Neutral
        } else {
            Self::Negative
        }
    }
}

fn calorie_note(tier: Tier) -> &'static str {
    match tier {
        Tier::Positive => "Good calorie size for your daily goal.",
        Tier::Neutral => "Calorie portion is a bit off your ideal share.",
        Tier::Negative => "Calories are far from your ideal share for this meal.",
    }
}

fn protein_note(tier: Tier) -> &'static str {
    match tier {
        Tier::Positive => "Protein amount and density look strong.",
        Tier::Neutral => "Protein could be higher to better support your goal.",
        Tier::Negative => "Very low protein contribution for this meal.",
    }
}

/// Out-of-range macros, protein then fat then carbs
fn macro_issues(percentages: &MacroPercentages, ranges: &MacroRanges) -> Vec<&'static str> {
    let checks = [
        (
            ranges.protein.classify(percentages.protein),
            "protein is low",
            "protein is high",
        ),
        (
            ranges.fat.classify(percentages.fat),
            "fat is low",
            "fat is high",
        ),
        (
            ranges.carbs.classify(percentages.carbs),
            "carbs are low",
            "carbs are high",
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(status, low, high)| match status {
            MacroStatus::Low => Some(low),
            MacroStatus::High => Some(high),
            MacroStatus::InRange => None,
        })
        .collect()
}

fn macro_note(percentages: &MacroPercentages, ranges: &MacroRanges) -> String {
    let issues = macro_issues(percentages, ranges);
    if issues.is_empty() {
        "Macros are balanced for your goal.".to_owned()
    } else {
        format!("Macro balance needs attention: {}.", issues.join(", "))
    }
}

/// Build the explanation for a scored meal
///
/// Always returns three notes: calorie, protein, macro balance.
#[must_use]
pub fn build_explanation(
    calorie_alignment: f64,
    protein_alignment: f64,
    percentages: &MacroPercentages,
    ranges: &MacroRanges,
    thresholds: &ExplanationThresholds,
) -> Vec<String> {
    vec![
        calorie_note(Tier::for_score(calorie_alignment, thresholds)).to_owned(),
        protein_note(Tier::for_score(protein_alignment, thresholds)).to_owned(),
        macro_note(percentages, ranges),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scoring::GoalProfilesConfig;

    fn maintain_ranges() -> MacroRanges {
        GoalProfilesConfig::default().maintain.macro_ranges
    }

    #[test]
    fn test_balanced_meal_gets_single_balanced_note() {
        let percentages = MacroPercentages {
            protein: 0.25,
            fat: 0.30,
            carbs: 0.45,
        };
        let notes = build_explanation(
            90.0,
            90.0,
            &percentages,
            &maintain_ranges(),
            &ExplanationThresholds::default(),
        );
        assert_eq!(
            notes,
            vec![
                "Good calorie size for your daily goal.",
                "Protein amount and density look strong.",
                "Macros are balanced for your goal.",
            ]
        );
    }

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        let thresholds = ExplanationThresholds::default();
        assert_eq!(Tier::for_score(85.0, &thresholds), Tier::Positive);
        assert_eq!(Tier::for_score(84.99, &thresholds), Tier::Neutral);
        assert_eq!(Tier::for_score(50.0, &thresholds), Tier::Neutral);
        assert_eq!(Tier::for_score(49.99, &thresholds), Tier::Negative);
    }

    #[test]
    fn test_macro_issues_are_ordered_protein_fat_carbs() {
        let percentages = MacroPercentages {
            protein: 0.05,
            fat: 0.60,
            carbs: 0.10,
        };
        let notes = build_explanation(
            60.0,
            30.0,
            &percentages,
            &maintain_ranges(),
            &ExplanationThresholds::default(),
        );
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0], "Calorie portion is a bit off your ideal share.");
        assert_eq!(notes[1], "Very low protein contribution for this meal.");
        assert_eq!(
            notes[2],
            "Macro balance needs attention: protein is low, fat is high, carbs are low."
        );
    }
}
