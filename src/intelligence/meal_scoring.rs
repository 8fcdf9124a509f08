// ABOUTME: Meal effectiveness scoring from calorie alignment, protein alignment, and macro balance
// ABOUTME: Combines goal-weighted sub-scores into a 0-100 score, grade, and explanation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Effectiveness Scoring
//!
//! Scores a single logged meal against the user's daily targets and goal.
//!
//! ```text
//! calorie alignment  = 1 - min(|meal - daily * share| / (daily * share), 1)
//! protein alignment  = 0.4 * amount + 0.6 * density
//! macro balance      = 1 - min(mean(range penalties), 1)
//! score              = round(w_cal * cal + w_prot * prot + w_macro * macro)
//! ```
//!
//! All sub-scores are on a 0-100 scale. A meal with no calories cannot be
//! scored and yields `None`; every other malformed input degrades to a
//! worst-case sub-score instead of failing.

use crate::config::scoring::{
    GoalProfile, GradeThresholds, MacroRange, MacroRanges, ProteinScoringConfig, ScoringConfig,
};
use crate::intelligence::explanation::{build_explanation, MacroPercentages};
use crate::intelligence::goals::{MealType, NutritionGoal};
use mealscore_core::constants::energy::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Per-meal totals plus the user's daily targets
///
/// Field names follow the camelCase input contract of the meal-logging path
/// (`mealProteinG`, `dailyCalorieTarget`, ...). Missing numbers read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealNutrientSample {
    /// Free-form goal label, e.g. `"Lose Weight"`
    pub goal: Option<String>,
    /// Daily calorie target (kcal)
    pub daily_calorie_target: f64,
    /// Daily protein target (grams)
    pub daily_protein_target: f64,
    /// Meal calories, already multiplied by quantity (kcal)
    pub meal_calories: f64,
    /// Meal protein (grams)
    pub meal_protein_g: f64,
    /// Meal fat (grams)
    pub meal_fat_g: f64,
    /// Meal carbohydrates (grams)
    pub meal_carbs_g: f64,
    /// Free-form meal type label, e.g. `"Lunch"`
    pub meal_type: Option<String>,
}

/// Letter grade derived from the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreGrade {
    /// Below the okay threshold
    Poor,
    /// At or above 50
    Okay,
    /// At or above 70
    Good,
    /// At or above 85
    Excellent,
}

impl ScoreGrade {
    /// Grade for a score, lower bounds inclusive
    #[must_use]
    pub const fn from_score(score: u8, thresholds: &GradeThresholds) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.okay {
            Self::Okay
        } else {
            Self::Poor
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Okay => "Okay",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sub-scores, each on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// How close meal calories are to the meal's ideal share of the day
    pub calorie_alignment: f64,
    /// Protein amount vs. daily target blended with protein density
    pub protein_alignment: f64,
    /// How well the macro split fits the goal's ranges
    pub macro_balance: f64,
}

/// Diagnostics attached to a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreMeta {
    /// Protein share of meal calories (fraction)
    pub pct_protein_calories: f64,
    /// Carbohydrate share of meal calories (fraction)
    pub pct_carb_calories: f64,
    /// Fat share of meal calories (fraction)
    pub pct_fat_calories: f64,
    /// Normalized meal type
    pub meal_type: MealType,
    /// Normalized goal
    pub goal: NutritionGoal,
}

/// Result of scoring one meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealScore {
    /// Final score, 0-100
    pub score: u8,
    /// Letter grade
    pub grade: ScoreGrade,
    /// Sub-score breakdown
    pub breakdown: ScoreBreakdown,
    /// Calorie, protein and macro notes, in that order
    pub explanation: Vec<String>,
    /// Diagnostics
    pub meta: ScoreMeta,
}

/// Finite and positive, otherwise 0
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Calorie alignment sub-score
///
/// With no usable daily target the ideal meal size is 0 and the meal gets
/// the worst-case score.
#[must_use]
pub fn calorie_alignment_score(meal_calories: f64, daily_calorie_target: f64, meal_share: f64) -> f64 {
    let ideal_meal_calories = daily_calorie_target * meal_share;
    let ratio_diff = if ideal_meal_calories > 0.0 {
        (meal_calories - ideal_meal_calories).abs() / ideal_meal_calories
    } else {
        1.0
    };
    (1.0 - ratio_diff.min(1.0)) * 100.0
}

/// Protein alignment sub-score
///
/// The amount part compares grams against the daily target (capped at
/// half the day); the density part compares the protein share of calories
/// against the goal's density target.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn protein_alignment_score(
    protein_g: f64,
    daily_protein_target_g: f64,
    protein_pct: f64,
    density_target: f64,
    config: &ProteinScoringConfig,
) -> f64 {
    let protein_fraction = protein_g / daily_protein_target_g.max(config.min_daily_target_g);
    let capped = protein_fraction.min(config.amount_cap_fraction);
    let amount_score = (capped / config.full_credit_fraction).min(1.0) * 100.0;

    let density_score = if protein_pct >= density_target {
        100.0
    } else {
        let density_diff = (density_target - protein_pct) / density_target;
        (1.0 - density_diff.min(1.0)) * 100.0
    };

    config.amount_weight * amount_score + config.density_weight * density_score
}

/// Relative distance of a calorie fraction outside its target range
///
/// Below the range the gap is divided by `low`, above it by `1 - high`.
/// A zero denominator is replaced by 1.
#[must_use]
pub fn macro_penalty(pct: f64, range: &MacroRange) -> f64 {
    if pct >= range.low && pct <= range.high {
        return 0.0;
    }
    if pct < range.low {
        let denominator = if range.low > 0.0 { range.low } else { 1.0 };
        (range.low - pct) / denominator
    } else {
        let headroom = 1.0 - range.high;
        let denominator = if headroom > 0.0 { headroom } else { 1.0 };
        (pct - range.high) / denominator
    }
}

/// Macro balance sub-score
#[must_use]
pub fn macro_balance_score(percentages: &MacroPercentages, ranges: &MacroRanges) -> f64 {
    let avg_penalty = (macro_penalty(percentages.protein, &ranges.protein)
        + macro_penalty(percentages.fat, &ranges.fat)
        + macro_penalty(percentages.carbs, &ranges.carbs))
        / 3.0;
    (1.0 - avg_penalty.min(1.0)) * 100.0
}

/// Weighted combination of the sub-scores, rounded half away from zero
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn combine_sub_scores(breakdown: &ScoreBreakdown, profile: &GoalProfile) -> u8 {
    let weights = &profile.weights;
    // Plain products summed left to right; no fused multiply-add
    let raw = weights.calorie * breakdown.calorie_alignment
        + weights.protein * breakdown.protein_alignment
        + weights.macro_balance * breakdown.macro_balance;
    raw.round().clamp(0.0, 100.0) as u8
}

/// Score one meal against the given configuration
///
/// Returns `None` when the meal has no (finite, positive) calories.
#[must_use]
pub fn calculate_meal_effectiveness(
    sample: &MealNutrientSample,
    config: &ScoringConfig,
) -> Option<MealScore> {
    let calories = sample.meal_calories;
    if !calories.is_finite() || calories <= 0.0 {
        debug!(meal_calories = calories, "Meal has no calories, not scorable");
        return None;
    }

    let goal = NutritionGoal::normalize(sample.goal.as_deref());
    let meal_type = MealType::normalize(sample.meal_type.as_deref());
    let profile = config.profile_for(goal);

    let protein_g = non_negative(sample.meal_protein_g);
    let percentages = MacroPercentages {
        protein: protein_g * PROTEIN_KCAL_PER_GRAM / calories,
        fat: non_negative(sample.meal_fat_g) * FAT_KCAL_PER_GRAM / calories,
        carbs: non_negative(sample.meal_carbs_g) * CARBS_KCAL_PER_GRAM / calories,
    };

    let breakdown = ScoreBreakdown {
        calorie_alignment: calorie_alignment_score(
            calories,
            non_negative(sample.daily_calorie_target),
            config.meal_shares.share_for(&meal_type),
        ),
        protein_alignment: protein_alignment_score(
            protein_g,
            non_negative(sample.daily_protein_target),
            percentages.protein,
            profile.protein_density_target,
            &config.protein,
        ),
        macro_balance: macro_balance_score(&percentages, &profile.macro_ranges),
    };

    let score = combine_sub_scores(&breakdown, profile);
    let grade = ScoreGrade::from_score(score, &config.grades);

    trace!(
        goal = %goal,
        meal_type = %meal_type,
        calorie_alignment = breakdown.calorie_alignment,
        protein_alignment = breakdown.protein_alignment,
        macro_balance = breakdown.macro_balance,
        score,
        grade = %grade,
        "Scored meal"
    );

    let explanation = build_explanation(
        breakdown.calorie_alignment,
        breakdown.protein_alignment,
        &percentages,
        &profile.macro_ranges,
        &config.explanation,
    );

    Some(MealScore {
        score,
        grade,
        breakdown,
        explanation,
        meta: ScoreMeta {
            pct_protein_calories: percentages.protein,
            pct_carb_calories: percentages.carbs,
            pct_fat_calories: percentages.fat,
            meal_type,
            goal,
        },
    })
}

/// Score one meal against the global configuration
#[must_use]
pub fn score_meal(sample: &MealNutrientSample) -> Option<MealScore> {
    calculate_meal_effectiveness(sample, ScoringConfig::global())
}

/// Score a batch of meals in parallel, preserving input order
#[must_use]
pub fn score_meal_batch(
    samples: &[MealNutrientSample],
    config: &ScoringConfig,
) -> Vec<Option<MealScore>> {
    let results: Vec<Option<MealScore>> = samples
        .par_iter()
        .map(|sample| calculate_meal_effectiveness(sample, config))
        .collect();

    debug!(
        meals = samples.len(),
        scored = results.iter().filter(|result| result.is_some()).count(),
        "Scored meal batch"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(goal: &str, meal_type: &str) -> MealNutrientSample {
        MealNutrientSample {
            goal: Some(goal.to_owned()),
            meal_type: Some(meal_type.to_owned()),
            daily_calorie_target: 2000.0,
            daily_protein_target: 100.0,
            ..MealNutrientSample::default()
        }
    }

    #[test]
    fn test_calorie_alignment_exact_share_is_perfect() {
        assert!((calorie_alignment_score(600.0, 2000.0, 0.30) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_alignment_without_target_is_worst_case() {
        assert!(calorie_alignment_score(500.0, 0.0, 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_calorie_alignment_caps_large_deviation() {
        // Three times the ideal size: ratio diff 2.0, capped to 1.0
        assert!(calorie_alignment_score(1800.0, 2000.0, 0.30).abs() < 1e-9);
        // Half the ideal size
        assert!((calorie_alignment_score(300.0, 2000.0, 0.30) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_protein_amount_saturates_at_quarter_of_daily_target() {
        let config = ProteinScoringConfig::default();
        // 25g of a 100g target with full density: both parts at 100
        let full = protein_alignment_score(25.0, 100.0, 0.40, 0.30, &config);
        assert!((full - 100.0).abs() < 1e-9);
        // 12.5g: amount 50, density 100 -> 0.4 * 50 + 0.6 * 100
        let half = protein_alignment_score(12.5, 100.0, 0.40, 0.30, &config);
        assert!((half - 80.0).abs() < 1e-9);
    }

    #[test]
    #[allow(clippy::suboptimal_flops)]
    fn test_protein_blend_uses_unfused_products() {
        let config = ProteinScoringConfig::default();
        for step in 0..200_u32 {
            let protein_g = f64::from(step) * 0.37;
            let protein_pct = f64::from(step % 37) / 100.0;
            let amount = (protein_g / 120.0).min(0.5) / 0.25;
            let amount_score = amount.min(1.0) * 100.0;
            let density_score = if protein_pct >= 0.35 {
                100.0
            } else {
                (1.0 - ((0.35 - protein_pct) / 0.35).min(1.0)) * 100.0
            };
            let expected = 0.4 * amount_score + 0.6 * density_score;
            let actual = protein_alignment_score(protein_g, 120.0, protein_pct, 0.35, &config);
            assert_eq!(actual.to_bits(), expected.to_bits(), "step {step}");
        }
    }

    #[test]
    fn test_protein_target_floor_avoids_division_by_zero() {
        let config = ProteinScoringConfig::default();
        let score = protein_alignment_score(30.0, 0.0, 0.0, 0.20, &config);
        // Fraction 30 capped at 0.5 -> amount 100; density 0
        assert!((score - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_macro_penalty_inside_range_is_zero() {
        let range = MacroRange::new(0.25, 0.35);
        assert!(macro_penalty(0.25, &range).abs() < f64::EPSILON);
        assert!(macro_penalty(0.30, &range).abs() < f64::EPSILON);
        assert!(macro_penalty(0.35, &range).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_penalty_relative_distance() {
        let range = MacroRange::new(0.20, 0.30);
        assert!((macro_penalty(0.10, &range) - 0.5).abs() < 1e-9);
        // (0.65 - 0.30) / 0.70
        assert!((macro_penalty(0.65, &range) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_macro_penalty_zero_denominator_guards() {
        let open_low = MacroRange::new(0.0, 0.5);
        assert!(macro_penalty(0.0, &open_low).abs() < f64::EPSILON);
        let open_high = MacroRange::new(0.5, 1.0);
        assert!((macro_penalty(1.5, &open_high) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_grade_band_boundaries() {
        let thresholds = GradeThresholds::default();
        assert_eq!(ScoreGrade::from_score(100, &thresholds), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_score(85, &thresholds), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_score(84, &thresholds), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(70, &thresholds), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(69, &thresholds), ScoreGrade::Okay);
        assert_eq!(ScoreGrade::from_score(50, &thresholds), ScoreGrade::Okay);
        assert_eq!(ScoreGrade::from_score(49, &thresholds), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::from_score(0, &thresholds), ScoreGrade::Poor);
    }

    #[test]
    fn test_grade_is_monotonic_in_score() {
        let thresholds = GradeThresholds::default();
        let grades: Vec<ScoreGrade> = (0..=100)
            .map(|score| ScoreGrade::from_score(score, &thresholds))
            .collect();
        assert!(grades.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_combine_rounds_half_away_from_zero() {
        let profile = ScoringConfig::default().goals.maintain;
        // 0.4 * 100 + 0.3 * 50 + 0.3 * 1.5 = 55.45 -> 55
        let breakdown = ScoreBreakdown {
            calorie_alignment: 100.0,
            protein_alignment: 50.0,
            macro_balance: 1.5,
        };
        assert_eq!(combine_sub_scores(&breakdown, &profile), 55);
        // 0.4 * 100 + 0.3 * 50 + 0.3 * 5.0 = 56.5 -> 57
        let tie = ScoreBreakdown {
            macro_balance: 5.0,
            ..breakdown
        };
        assert_eq!(combine_sub_scores(&tie, &profile), 57);
    }

    #[test]
    fn test_non_finite_calories_are_not_scorable() {
        let config = ScoringConfig::default();
        for calories in [0.0, -120.0, f64::NAN, f64::INFINITY] {
            let meal = MealNutrientSample {
                meal_calories: calories,
                ..sample("Maintain", "Lunch")
            };
            assert!(calculate_meal_effectiveness(&meal, &config).is_none());
        }
    }

    #[test]
    fn test_negative_grams_are_clamped() {
        let config = ScoringConfig::default();
        let meal = MealNutrientSample {
            meal_calories: 400.0,
            meal_protein_g: -30.0,
            meal_fat_g: -5.0,
            meal_carbs_g: 100.0,
            ..sample("Gain Muscle", "Dinner")
        };
        let result = calculate_meal_effectiveness(&meal, &config);
        assert!(result.is_some());
        if let Some(result) = result {
            assert!(result.meta.pct_protein_calories.abs() < f64::EPSILON);
            assert!(result.breakdown.protein_alignment >= 0.0);
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn test_meta_reports_normalized_labels() {
        let config = ScoringConfig::default();
        let meal = MealNutrientSample {
            meal_calories: 500.0,
            meal_protein_g: 30.0,
            meal_fat_g: 15.0,
            meal_carbs_g: 60.0,
            meal_type: None,
            ..sample("gain_muscle", "")
        };
        let result = calculate_meal_effectiveness(&meal, &config);
        let meta = result.map(|score| score.meta);
        assert_eq!(
            meta.as_ref().map(|meta| meta.goal),
            Some(NutritionGoal::GainMuscle)
        );
        assert_eq!(
            meta.map(|meta| meta.meal_type),
            Some(MealType::Unspecified)
        );
    }
}
