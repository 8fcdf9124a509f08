// ABOUTME: Per-meal nutrient totals computed from a logged food serving and its quantity
// ABOUTME: Falls back to macro-derived calories and builds the scoring input sample
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::daily_targets::DailyTargets;
use crate::intelligence::goals::{MealType, NutritionGoal};
use crate::intelligence::meal_scoring::MealNutrientSample;
use mealscore_core::constants::energy::macro_calories;
use serde::{Deserialize, Serialize};

/// A logged food entry: per-serving nutrients and how many servings were eaten
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealServing {
    /// Number of servings eaten; non-positive or missing counts as one
    pub quantity: f64,
    /// Calories per serving (kcal), 0 when unknown
    pub calories_per_serving: f64,
    /// Protein per serving (g)
    pub protein_per_serving: f64,
    /// Fat per serving (g)
    pub fat_per_serving: f64,
    /// Carbohydrates per serving (g)
    #[serde(alias = "carbohydratesPerServing")]
    pub carbs_per_serving: f64,
}

/// Nutrient totals for one meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// Total calories (kcal)
    pub calories: f64,
    /// Total protein (g)
    pub protein_g: f64,
    /// Total fat (g)
    pub fat_g: f64,
    /// Total carbohydrates (g)
    pub carbs_g: f64,
}

fn per_serving(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl MealServing {
    /// Quantity actually applied to the per-serving values
    #[must_use]
    pub fn effective_quantity(&self) -> f64 {
        if self.quantity.is_finite() && self.quantity > 0.0 {
            self.quantity
        } else {
            1.0
        }
    }

    /// Multiply per-serving nutrients by the quantity
    ///
    /// When the serving carries no calorie figure, calories are rebuilt from
    /// the macros (4/4/9 kcal per gram).
    #[must_use]
    pub fn totals(&self) -> MealTotals {
        let quantity = self.effective_quantity();
        let protein_g = per_serving(self.protein_per_serving) * quantity;
        let fat_g = per_serving(self.fat_per_serving) * quantity;
        let carbs_g = per_serving(self.carbs_per_serving) * quantity;

        let labelled = per_serving(self.calories_per_serving) * quantity;
        let calories = if labelled > 0.0 {
            labelled
        } else {
            macro_calories(protein_g, fat_g, carbs_g)
        };

        MealTotals {
            calories,
            protein_g,
            fat_g,
            carbs_g,
        }
    }
}

impl MealTotals {
    /// Build the scoring input for these totals
    #[must_use]
    pub fn to_sample(
        &self,
        goal: NutritionGoal,
        meal_type: &MealType,
        targets: &DailyTargets,
    ) -> MealNutrientSample {
        MealNutrientSample {
            goal: Some(goal.as_str().to_owned()),
            daily_calorie_target: targets.calories,
            daily_protein_target: targets.protein_g,
            meal_calories: self.calories,
            meal_protein_g: self.protein_g,
            meal_fat_g: self.fat_g,
            meal_carbs_g: self.carbs_g,
            meal_type: match meal_type {
                MealType::Unspecified => None,
                labelled => Some(labelled.as_str().to_owned()),
            },
        }
    }
}
