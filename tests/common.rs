// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides reference meal samples and float comparison helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments
)]
//! Shared test utilities for `mealscore`

use mealscore::intelligence::meal_scoring::MealNutrientSample;

/// Build a sample from labels, targets and meal macros
pub fn sample(
    goal: &str,
    meal_type: &str,
    daily_calorie_target: f64,
    daily_protein_target: f64,
    meal_calories: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
) -> MealNutrientSample {
    MealNutrientSample {
        goal: Some(goal.to_owned()),
        daily_calorie_target,
        daily_protein_target,
        meal_calories,
        meal_protein_g: protein_g,
        meal_fat_g: fat_g,
        meal_carbs_g: carbs_g,
        meal_type: Some(meal_type.to_owned()),
    }
}

/// Lunch sized exactly at the 30% share for a weight-loss goal
pub fn weight_loss_lunch() -> MealNutrientSample {
    sample("Lose Weight", "Lunch", 1800.0, 120.0, 540.0, 40.0, 15.0, 60.0)
}

/// Small all-carb snack on a maintenance goal
pub fn carb_only_snack() -> MealNutrientSample {
    sample("Maintain", "Snack", 2000.0, 100.0, 100.0, 0.0, 0.0, 25.0)
}

/// Assert two floats are within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
