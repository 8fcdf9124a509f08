// ABOUTME: Main library entry point for the meal effectiveness scoring engine
// ABOUTME: Scores logged meals against daily targets and nutrition goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Score
//!
//! Rates a single meal from 0 to 100 against the user's daily calorie and
//! protein targets and nutrition goal, with a grade and short notes.
//!
//! ## Architecture
//!
//! - **Config**: goal-indexed weights, macro ranges, meal shares, grade bands
//! - **Intelligence**: goal normalization, daily targets, meal totals, scoring
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use mealscore::intelligence::meal_scoring::{score_meal, MealNutrientSample};
//!
//! let sample = MealNutrientSample {
//!     goal: Some("Lose Weight".to_owned()),
//!     meal_type: Some("Lunch".to_owned()),
//!     daily_calorie_target: 1800.0,
//!     daily_protein_target: 120.0,
//!     meal_calories: 540.0,
//!     meal_protein_g: 40.0,
//!     meal_fat_g: 15.0,
//!     meal_carbs_g: 60.0,
//! };
//!
//! if let Some(result) = score_meal(&sample) {
//!     println!("{} ({})", result.score, result.grade);
//! }
//! ```

/// Scoring configuration and validation
pub mod config;

/// Meal scoring, targets, and explanations
pub mod intelligence;

/// Logging configuration
pub mod logging;

pub use mealscore_core::{constants, errors};
