// ABOUTME: Intelligence module for meal effectiveness scoring
// ABOUTME: Goal normalization, daily targets, meal totals, scoring, and explanations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Scores how well a single meal fits a user's daily targets and goal.

/// Daily calorie and macro targets from a profile or a single meal
pub mod daily_targets;
/// Human-readable notes for each sub-score
pub mod explanation;
/// Nutrition goal and meal type normalization
pub mod goals;
/// Meal effectiveness scorer
pub mod meal_scoring;
/// Per-meal nutrient totals from a logged serving
pub mod meal_totals;

pub use daily_targets::{
    derive_daily_targets, fallback_targets_from_meal, resolve_daily_targets, ActivityLevel,
    DailyTargets, Gender, UserProfile,
};
pub use explanation::{build_explanation, MacroPercentages};
pub use goals::{MealType, NutritionGoal};
pub use meal_scoring::{
    calculate_meal_effectiveness, score_meal, score_meal_batch, MealNutrientSample, MealScore,
    ScoreBreakdown, ScoreGrade, ScoreMeta,
};
pub use meal_totals::{MealServing, MealTotals};
