// ABOUTME: Integration tests for scoring configuration loading and validation
// ABOUTME: Exercises environment overrides, parse failures, and error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealscore::config::{ConfigError, MacroRange, ScoringConfig};
use mealscore::errors::{AppError, ErrorCode};
use mealscore::intelligence::goals::{MealType, NutritionGoal};
use mealscore::intelligence::meal_scoring::{calculate_meal_effectiveness, ScoreGrade};
use serial_test::serial;
use std::env;

mod common;

use common::{assert_close, sample};

const OVERRIDE_VARS: [&str; 8] = [
    "MEAL_SCORING_SHARE_BREAKFAST",
    "MEAL_SCORING_SHARE_LUNCH",
    "MEAL_SCORING_SHARE_DINNER",
    "MEAL_SCORING_SHARE_SNACK",
    "MEAL_SCORING_SHARE_DEFAULT",
    "MEAL_SCORING_GRADE_EXCELLENT",
    "MEAL_SCORING_GRADE_GOOD",
    "MEAL_SCORING_GRADE_OKAY",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_equals_defaults() {
    clear_overrides();
    let loaded = ScoringConfig::load().unwrap();
    let defaults = ScoringConfig::default();

    assert_close(
        loaded.meal_shares.share_for(&MealType::Snack),
        defaults.meal_shares.share_for(&MealType::Snack),
        f64::EPSILON,
    );
    assert_eq!(loaded.grades.excellent, defaults.grades.excellent);
}

#[test]
#[serial]
fn test_share_override_changes_calorie_alignment() {
    clear_overrides();
    env::set_var("MEAL_SCORING_SHARE_SNACK", "0.05");
    let config = ScoringConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_close(config.meal_shares.share_for(&MealType::Snack), 0.05, f64::EPSILON);
    // Ideal snack is now 100 kcal
    let snack = sample("Maintain", "Snack", 2000.0, 100.0, 100.0, 0.0, 0.0, 25.0);
    let result = calculate_meal_effectiveness(&snack, &config).unwrap();
    assert_close(result.breakdown.calorie_alignment, 100.0, 1e-9);
}

#[test]
#[serial]
fn test_grade_overrides_move_bands() {
    clear_overrides();
    env::set_var("MEAL_SCORING_GRADE_EXCELLENT", "95");
    env::set_var("MEAL_SCORING_GRADE_GOOD", "80");
    env::set_var("MEAL_SCORING_GRADE_OKAY", "60");
    let config = ScoringConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_eq!(ScoreGrade::from_score(94, &config.grades), ScoreGrade::Good);
    assert_eq!(ScoreGrade::from_score(59, &config.grades), ScoreGrade::Poor);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("MEAL_SCORING_SHARE_LUNCH", "a third");
    let result = ScoringConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_share_is_rejected() {
    clear_overrides();
    env::set_var("MEAL_SCORING_SHARE_DINNER", "1.5");
    let result = ScoringConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_unordered_grade_overrides_are_rejected() {
    clear_overrides();
    env::set_var("MEAL_SCORING_GRADE_OKAY", "90");
    let result = ScoringConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

// ============================================================================
// VALIDATION AND ERROR CONVERSION
// ============================================================================

#[test]
fn test_goal_weights_sum_to_one() {
    let config = ScoringConfig::default();
    for goal in NutritionGoal::ALL {
        let weights = config.profile_for(goal).weights;
        assert_close(weights.calorie + weights.protein + weights.macro_balance, 1.0, 1e-12);
    }
}

#[test]
fn test_range_outside_unit_interval_is_rejected() {
    let mut config = ScoringConfig::default();
    config.goals.lose_weight.macro_ranges.fat = MacroRange::new(0.2, 1.2);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_config_errors_convert_to_app_errors() {
    let invalid: AppError = ConfigError::InvalidWeights {
        goal: NutritionGoal::Maintain,
        sum: 0.9,
    }
    .into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert_eq!(invalid.code.exit_code(), 3);

    let parse: AppError = ConfigError::Parse("Invalid MEAL_SCORING_GRADE_GOOD".to_owned()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);
    assert!(parse.message.contains("MEAL_SCORING_GRADE_GOOD"));
}
