// ABOUTME: Targets command for meal-score
// ABOUTME: Derives daily calorie and macro targets from body measurements and goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealscore::errors::{AppError, AppResult};
use mealscore::intelligence::daily_targets::{
    derive_daily_targets, ActivityLevel, Gender, UserProfile,
};
use mealscore::intelligence::goals::NutritionGoal;
use serde_json::json;
use tracing::warn;

use super::load_config;
use crate::helpers::io::print_json;

/// Raw profile arguments from the command line
pub struct TargetsArgs {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age: u32,
    /// Gender label, female constant when absent or unrecognized
    pub gender: Option<String>,
    /// Activity label, sedentary when unrecognized
    pub activity: String,
    /// Goal label, maintain when absent or unrecognized
    pub goal: Option<String>,
}

impl TargetsArgs {
    fn profile(&self) -> UserProfile {
        let gender = self.gender.as_deref().and_then(|label| {
            let parsed = Gender::from_label(label);
            if parsed.is_none() {
                warn!("Unrecognized gender '{label}', using the female BMR constant");
            }
            parsed
        });

        UserProfile {
            weight_kg: Some(self.weight_kg),
            height_cm: Some(self.height_cm),
            age: Some(self.age),
            gender,
            activity_level: ActivityLevel::from_label(&self.activity),
            goal: NutritionGoal::normalize(self.goal.as_deref()),
        }
    }
}

/// Derive and print daily targets
pub fn run(args: &TargetsArgs, pretty: bool) -> AppResult<()> {
    let config = load_config()?;
    let profile = args.profile();

    let targets = derive_daily_targets(&profile, &config.daily_targets).ok_or_else(|| {
        AppError::invalid_input("Weight, height and age must all be positive").with_details(
            json!({
                "weightKg": args.weight_kg,
                "heightCm": args.height_cm,
                "age": args.age,
            }),
        )
    })?;

    print_json(
        &json!({
            "goal": profile.goal,
            "activityLevel": profile.activity_level,
            "targets": targets,
        }),
        pretty,
    )
}
