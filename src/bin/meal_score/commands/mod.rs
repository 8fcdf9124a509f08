// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for meal-score
// ABOUTME: Provides the score, log, and targets subcommands

pub mod log;
pub mod score;
pub mod targets;

use mealscore::config::ScoringConfig;
use mealscore::errors::{AppError, AppResult};

/// Load the scoring configuration, failing on invalid environment overrides
pub fn load_config() -> AppResult<ScoringConfig> {
    ScoringConfig::load().map_err(AppError::from)
}
