// ABOUTME: Score command for meal-score
// ABOUTME: Scores one meal nutrient sample or a JSON array of them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealscore::errors::AppResult;
use mealscore::intelligence::meal_scoring::{
    calculate_meal_effectiveness, score_meal_batch, MealNutrientSample,
};
use mealscore::logging::ScoringLogger;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use super::load_config;
use crate::helpers::io::{print_json, read_input};

/// Score the samples in `input` and print the results
pub fn run(input: Option<&Path>, pretty: bool) -> AppResult<()> {
    let config = load_config()?;
    let document: Value = serde_json::from_str(&read_input(input)?)?;

    if document.is_array() {
        let samples: Vec<MealNutrientSample> = serde_json::from_value(document)?;
        let results = score_meal_batch(&samples, &config);
        for (index, result) in results.iter().enumerate() {
            ScoringLogger::log_meal_scored(index, result.as_ref());
        }
        info!(meals = results.len(), "Scored batch");
        print_json(&results, pretty)
    } else {
        let sample: MealNutrientSample = serde_json::from_value(document)?;
        let result = calculate_meal_effectiveness(&sample, &config);
        ScoringLogger::log_meal_scored(0, result.as_ref());
        print_json(&result, pretty)
    }
}
