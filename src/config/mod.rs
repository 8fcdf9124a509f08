// ABOUTME: Configuration management module for the meal scoring engine
// ABOUTME: Exposes scoring tables, daily target parameters, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Scoring**: goal weights, macro ranges, meal shares, grade bands
//! - **Daily targets**: Mifflin-St Jeor coefficients and fallback macro splits
//! - **Errors**: validation and environment override failures

/// Configuration error types
pub mod error;
/// Meal scoring tables and their validation
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{
    DailyTargetsConfig, ExplanationThresholds, GoalProfile, GoalProfilesConfig, GradeThresholds,
    MacroRange, MacroRanges, MacroSplit, MacroStatus, MealSharesConfig, ProteinScoringConfig,
    ScoreWeights, ScoringConfig,
};
