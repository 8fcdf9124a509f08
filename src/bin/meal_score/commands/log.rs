// ABOUTME: Log command for meal-score
// ABOUTME: Totals a logged serving, resolves daily targets, and scores the meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealscore::errors::AppResult;
use mealscore::intelligence::daily_targets::{resolve_daily_targets, DailyTargets, UserProfile};
use mealscore::intelligence::goals::{MealType, NutritionGoal};
use mealscore::intelligence::meal_scoring::{calculate_meal_effectiveness, MealScore};
use mealscore::intelligence::meal_totals::{MealServing, MealTotals};
use mealscore::logging::ScoringLogger;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::load_config;
use crate::helpers::io::{print_json, read_input};

/// A meal log entry: the serving plus whatever targets or profile the client has
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MealLogEntry {
    #[serde(flatten)]
    serving: MealServing,
    meal_type: Option<String>,
    goal: Option<String>,
    daily_calorie_target: Option<f64>,
    daily_protein_target: Option<f64>,
    daily_fat_target: Option<f64>,
    daily_carb_target: Option<f64>,
    profile: Option<UserProfile>,
}

impl MealLogEntry {
    fn provided_targets(&self) -> DailyTargets {
        DailyTargets {
            calories: self.daily_calorie_target.unwrap_or_default(),
            protein_g: self.daily_protein_target.unwrap_or_default(),
            fat_g: self.daily_fat_target.unwrap_or_default(),
            carbs_g: self.daily_carb_target.unwrap_or_default(),
        }
    }

    /// Explicit goal wins over the profile's
    fn goal(&self) -> NutritionGoal {
        match self.goal.as_deref() {
            Some(label) => NutritionGoal::normalize(Some(label)),
            None => self
                .profile
                .as_ref()
                .map_or_else(NutritionGoal::default, |profile| profile.goal),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoggedMeal {
    totals: MealTotals,
    targets: Option<DailyTargets>,
    effectiveness: Option<MealScore>,
}

/// Score the meal log entry in `input` and print totals, targets and score
pub fn run(input: Option<&Path>, pretty: bool) -> AppResult<()> {
    let config = load_config()?;
    let entry: MealLogEntry = serde_json::from_str(&read_input(input)?)?;

    let totals = entry.serving.totals();
    let goal = entry.goal();
    let meal_type = MealType::normalize(entry.meal_type.as_deref());
    let targets = resolve_daily_targets(
        Some(&entry.provided_targets()),
        entry.profile.as_ref(),
        goal,
        totals.calories,
        &config.daily_targets,
    );

    let effectiveness = targets.as_ref().and_then(|targets| {
        calculate_meal_effectiveness(&totals.to_sample(goal, &meal_type, targets), &config)
    });
    ScoringLogger::log_meal_scored(0, effectiveness.as_ref());

    print_json(
        &LoggedMeal {
            totals,
            targets,
            effectiveness,
        },
        pretty,
    )
}
