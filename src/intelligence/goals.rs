// ABOUTME: Canonical nutrition goals and meal types with free-form string normalization
// ABOUTME: Maps user-entered goal and meal labels onto enums used by the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal and meal-type normalization.
//!
//! Both normalizers are total: unknown goals fall back to
//! [`NutritionGoal::Maintain`] and unknown meal types are carried through as
//! [`MealType::Other`] so the caller can still see what was logged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrition goal a user is working towards
///
/// Deserializes through [`NutritionGoal::normalize`], so unrecognized labels
/// read as `Maintain` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NutritionGoal {
    /// Caloric deficit with high protein to preserve lean mass
    LoseWeight,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus with protein emphasis
    GainMuscle,
}

impl NutritionGoal {
    /// All goals, in table order
    pub const ALL: [Self; 3] = [Self::LoseWeight, Self::Maintain, Self::GainMuscle];

    /// Strict alias lookup
    ///
    /// Accepts `"Lose Weight"`, `"LOSE_WEIGHT"`, `"loseweight"` and the
    /// analogous forms of the other goals, plus `"Maintain Weight"`.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_alias(raw: &str) -> Option<Self> {
        let key: String = raw
            .split_whitespace()
            .flat_map(str::chars)
            .filter(|c| *c != '_')
            .flat_map(char::to_uppercase)
            .collect();

        match key.as_str() {
            "LOSEWEIGHT" => Some(Self::LoseWeight),
            "GAINMUSCLE" => Some(Self::GainMuscle),
            "MAINTAIN" | "MAINTAINWEIGHT" => Some(Self::Maintain),
            _ => None,
        }
    }

    /// Total normalization: absent or unrecognized goals become `Maintain`
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_alias).unwrap_or_default()
    }

    /// Canonical identifier (`LOSE_WEIGHT`, `MAINTAIN`, `GAIN_MUSCLE`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "LOSE_WEIGHT",
            Self::Maintain => "MAINTAIN",
            Self::GainMuscle => "GAIN_MUSCLE",
        }
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NutritionGoal {
    fn from(raw: String) -> Self {
        Self::normalize(Some(&raw))
    }
}

impl From<NutritionGoal> for String {
    fn from(goal: NutritionGoal) -> Self {
        goal.as_str().to_owned()
    }
}

/// Meal slot a log entry belongs to
///
/// Serialized as the normalized upper-case label. Labels outside the four
/// known slots are kept verbatim (upper-cased) in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
    /// Any other label, upper-cased and trimmed
    Other(String),
    /// No meal type was logged
    #[default]
    Unspecified,
}

impl MealType {
    /// Normalize a free-form label: trim and upper-case, no alias table
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(label) = raw.map(str::trim).filter(|label| !label.is_empty()) else {
            return Self::Unspecified;
        };

        let upper = label.to_uppercase();
        match upper.as_str() {
            "BREAKFAST" => Self::Breakfast,
            "LUNCH" => Self::Lunch,
            "DINNER" => Self::Dinner,
            "SNACK" => Self::Snack,
            _ => Self::Other(upper),
        }
    }

    /// Normalized label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Breakfast => "BREAKFAST",
            Self::Lunch => "LUNCH",
            Self::Dinner => "DINNER",
            Self::Snack => "SNACK",
            Self::Other(label) => label,
            Self::Unspecified => "UNSPECIFIED",
        }
    }

    /// Whether this is one of the four known meal slots
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(
            self,
            Self::Breakfast | Self::Lunch | Self::Dinner | Self::Snack
        )
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for MealType {
    fn from(raw: String) -> Self {
        if raw.trim() == "UNSPECIFIED" {
            return Self::Unspecified;
        }
        Self::normalize(Some(&raw))
    }
}

impl From<MealType> for String {
    fn from(meal_type: MealType) -> Self {
        match meal_type {
            MealType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_aliases_are_equivalent() {
        for raw in ["Lose Weight", "LOSE_WEIGHT", "loseweight", "  lose   weight "] {
            assert_eq!(NutritionGoal::normalize(Some(raw)), NutritionGoal::LoseWeight);
        }
        for raw in ["Gain Muscle", "GAIN_MUSCLE", "gainmuscle"] {
            assert_eq!(NutritionGoal::normalize(Some(raw)), NutritionGoal::GainMuscle);
        }
        for raw in ["Maintain", "MAINTAIN_WEIGHT", "maintain weight"] {
            assert_eq!(NutritionGoal::normalize(Some(raw)), NutritionGoal::Maintain);
        }
    }

    #[test]
    fn test_unknown_goal_defaults_to_maintain() {
        assert_eq!(NutritionGoal::normalize(None), NutritionGoal::Maintain);
        assert_eq!(NutritionGoal::normalize(Some("")), NutritionGoal::Maintain);
        assert_eq!(NutritionGoal::normalize(Some("bulk")), NutritionGoal::Maintain);
        assert_eq!(NutritionGoal::from_alias("bulk"), None);
    }

    #[test]
    fn test_goal_serializes_canonical_name() {
        let json = serde_json::to_string(&NutritionGoal::LoseWeight).unwrap_or_default();
        assert_eq!(json, "\"LOSE_WEIGHT\"");
        assert_eq!(NutritionGoal::GainMuscle.to_string(), "GAIN_MUSCLE");
    }

    #[test]
    fn test_goal_deserialization_never_fails() {
        let parsed: Vec<NutritionGoal> =
            serde_json::from_str(r#"["lose weight", "Maintain Weight", "GAIN_MUSCLE", "bulk"]"#)
                .unwrap_or_default();
        assert_eq!(
            parsed,
            vec![
                NutritionGoal::LoseWeight,
                NutritionGoal::Maintain,
                NutritionGoal::GainMuscle,
                NutritionGoal::Maintain,
            ]
        );
    }

    #[test]
    fn test_meal_type_normalization() {
        assert_eq!(MealType::normalize(Some(" lunch ")), MealType::Lunch);
        assert_eq!(MealType::normalize(Some("Breakfast")), MealType::Breakfast);
        assert_eq!(
            MealType::normalize(Some("brunch")),
            MealType::Other("BRUNCH".to_owned())
        );
        assert_eq!(MealType::normalize(Some("   ")), MealType::Unspecified);
        assert_eq!(MealType::normalize(None), MealType::Unspecified);
    }

    #[test]
    fn test_meal_type_has_no_alias_table() {
        // Only trim + upper-case; near-miss labels are not coerced
        assert_eq!(
            MealType::normalize(Some("Snacks")),
            MealType::Other("SNACKS".to_owned())
        );
        assert!(!MealType::normalize(Some("Snacks")).is_known());
    }

    #[test]
    fn test_meal_type_serde_uses_label() {
        let json = serde_json::to_string(&MealType::Other("BRUNCH".to_owned())).unwrap_or_default();
        assert_eq!(json, "\"BRUNCH\"");
        let parsed: MealType = serde_json::from_str("\"dinner\"").unwrap_or_default();
        assert_eq!(parsed, MealType::Dinner);
        let unspecified: MealType =
            serde_json::from_str("\"UNSPECIFIED\"").unwrap_or(MealType::Lunch);
        assert_eq!(unspecified, MealType::Unspecified);
    }
}
