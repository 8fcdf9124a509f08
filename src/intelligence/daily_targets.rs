// ABOUTME: Daily calorie and macro targets from a user profile or inferred from a single meal
// ABOUTME: Mifflin-St Jeor BMR, activity factor, goal adjustment, and goal-specific macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Targets
//!
//! Targets come from one of three sources, in order of preference:
//!
//! 1. Targets supplied by the client, when all four are positive
//! 2. Targets derived from the user's profile (BMR x activity, adjusted for goal)
//! 3. Targets inferred from the meal itself, assuming it covers 30% of the day
//!
//! # References
//!
//! - Mifflin MD, et al. (1990). A new predictive equation for resting energy
//!   expenditure in healthy individuals. DOI: 10.1093/ajcn/51.2.241

use crate::config::scoring::DailyTargetsConfig;
use crate::intelligence::goals::NutritionGoal;
use mealscore_core::constants::energy::{
    CARBS_KCAL_PER_GRAM, FAT_KCAL_PER_GRAM, PROTEIN_KCAL_PER_GRAM,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::debug;

/// Gender used for the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male (+5 kcal)
    #[serde(alias = "male")]
    Male,
    /// Female (-161 kcal)
    #[serde(alias = "female")]
    Female,
}

impl Gender {
    /// Parse a case-insensitive label, `None` when unrecognized
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

/// Activity level for the TDEE multiplier
///
/// Serialized as its display label; deserialization goes through
/// [`ActivityLevel::from_label`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    ModeratelyActive,
    /// Exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    /// Parse a label such as `"Moderately Active"` or `"very_active"`
    ///
    /// Unknown labels read as sedentary.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_uppercase();
        match compact.as_str() {
            "LIGHTLYACTIVE" => Self::LightlyActive,
            "MODERATELYACTIVE" => Self::ModeratelyActive,
            "VERYACTIVE" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    /// TDEE multiplier for this level
    #[must_use]
    pub const fn factor(self, config: &DailyTargetsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary_factor,
            Self::LightlyActive => config.lightly_active_factor,
            Self::ModeratelyActive => config.moderately_active_factor,
            Self::VeryActive => config.very_active_factor,
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ActivityLevel {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<ActivityLevel> for String {
    fn from(level: ActivityLevel) -> Self {
        level.as_str().to_owned()
    }
}

/// Body measurements and lifestyle stored on a user's profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Age (years)
    pub age: Option<u32>,
    /// Gender; anything but male uses the female constant
    #[serde(deserialize_with = "deserialize_gender")]
    pub gender: Option<Gender>,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Nutrition goal
    pub goal: NutritionGoal,
}

fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Gender::from_label))
}

/// Daily calorie and macro targets, whole units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
}

impl DailyTargets {
    /// True when all four targets are finite and positive
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [self.calories, self.protein_g, self.fat_g, self.carbs_g]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }
}

fn measurement(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Derive daily targets from a profile
///
/// Returns `None` when weight, height or age is missing or zero.
#[must_use]
pub fn derive_daily_targets(
    profile: &UserProfile,
    config: &DailyTargetsConfig,
) -> Option<DailyTargets> {
    let (Some(weight_kg), Some(height_cm), Some(age)) = (
        measurement(profile.weight_kg),
        measurement(profile.height_cm),
        profile.age.filter(|age| *age > 0),
    ) else {
        debug!("Profile is missing weight, height or age; cannot derive daily targets");
        return None;
    };

    let gender_constant = match profile.gender {
        Some(Gender::Male) => config.msj_male_constant,
        Some(Gender::Female) | None => config.msj_female_constant,
    };
    let bmr = config.msj_weight_coef.mul_add(
        weight_kg,
        config
            .msj_height_coef
            .mul_add(height_cm, config.msj_age_coef.mul_add(f64::from(age), gender_constant)),
    );

    let adjustment = match profile.goal {
        NutritionGoal::LoseWeight => config.lose_weight_adjustment_kcal,
        NutritionGoal::GainMuscle => config.gain_muscle_adjustment_kcal,
        NutritionGoal::Maintain => 0.0,
    };
    let tdee = bmr.mul_add(profile.activity_level.factor(config), adjustment);
    let calories = tdee.round().max(config.min_daily_calories);

    let protein_per_kg = match profile.goal {
        NutritionGoal::LoseWeight | NutritionGoal::GainMuscle => config.protein_g_per_kg_active_goal,
        NutritionGoal::Maintain => config.protein_g_per_kg_maintain,
    };
    let protein_g = (weight_kg * protein_per_kg).round();

    let fat_calories = calories * config.fat_share;
    let fat_g = (fat_calories / FAT_KCAL_PER_GRAM).round();

    let protein_calories = protein_g * PROTEIN_KCAL_PER_GRAM;
    let carb_calories = (calories - fat_calories - protein_calories).max(0.0);
    let carbs_g = (carb_calories / CARBS_KCAL_PER_GRAM).round();

    debug!(
        bmr,
        activity = %profile.activity_level,
        goal = %profile.goal,
        calories,
        "Derived daily targets from profile"
    );

    Some(DailyTargets {
        calories,
        protein_g,
        fat_g,
        carbs_g,
    })
}

/// Infer daily targets from a single meal
///
/// The meal is assumed to be a fixed share of the day; macros follow the
/// goal's midpoint split. Non-finite or negative meal calories count as 0,
/// which lands on the calorie floor.
#[must_use]
pub fn fallback_targets_from_meal(
    goal: NutritionGoal,
    meal_calories: f64,
    config: &DailyTargetsConfig,
) -> DailyTargets {
    let meal_calories = if meal_calories.is_finite() {
        meal_calories.max(0.0)
    } else {
        0.0
    };
    let calories = (meal_calories / config.fallback_meal_share)
        .round()
        .max(config.min_daily_calories);
    let split = config.fallback_split(goal);

    DailyTargets {
        calories,
        protein_g: (calories * split.protein / PROTEIN_KCAL_PER_GRAM).round(),
        fat_g: (calories * split.fat / FAT_KCAL_PER_GRAM).round(),
        carbs_g: (calories * split.carbs / CARBS_KCAL_PER_GRAM).round(),
    }
}

/// Pick the daily targets used to score a meal
///
/// Supplied targets win when complete; otherwise the profile is used, and
/// failing that the meal itself under `goal`. Returns `None` only when the
/// meal has no usable calories to infer from.
#[must_use]
pub fn resolve_daily_targets(
    provided: Option<&DailyTargets>,
    profile: Option<&UserProfile>,
    goal: NutritionGoal,
    meal_calories: f64,
    config: &DailyTargetsConfig,
) -> Option<DailyTargets> {
    if let Some(targets) = provided.filter(|targets| targets.is_complete()) {
        return Some(*targets);
    }
    if let Some(derived) = profile.and_then(|profile| derive_daily_targets(profile, config)) {
        return Some(derived);
    }
    if !meal_calories.is_finite() || meal_calories <= 0.0 {
        debug!(meal_calories, "No targets supplied or derivable and meal has no calories");
        return None;
    }
    debug!(goal = %goal, meal_calories, "Inferring daily targets from meal");
    Some(fallback_targets_from_meal(goal, meal_calories, config))
}
