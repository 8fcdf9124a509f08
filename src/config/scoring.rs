// ABOUTME: Meal scoring configuration with goal-indexed weights, macro ranges, and meal shares
// ABOUTME: Provides validated defaults, environment overrides, and a read-only global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Scoring Configuration
//!
//! Every constant the scoring engine reads lives here, keyed by
//! [`NutritionGoal`] or [`MealType`]. The `Default` impls are the reference
//! tables; [`ScoringConfig::global`] hands out one validated, immutable copy
//! for the whole process.
//!
//! | Goal | calorie | protein | macro | density target |
//! |---|---|---|---|---|
//! | `LOSE_WEIGHT` | 0.50 | 0.35 | 0.15 | 0.30 |
//! | `MAINTAIN` | 0.40 | 0.30 | 0.30 | 0.20 |
//! | `GAIN_MUSCLE` | 0.30 | 0.50 | 0.20 | 0.30 |

use super::error::ConfigError;
use crate::intelligence::goals::{MealType, NutritionGoal};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Tolerance when checking that goal weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative weight of each sub-score in the final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Calorie alignment weight
    pub calorie: f64,
    /// Protein alignment weight
    pub protein: f64,
    /// Macro balance weight
    pub macro_balance: f64,
}

impl ScoreWeights {
    /// Sum of the three weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.calorie + self.protein + self.macro_balance
    }
}

/// Where a macro percentage sits relative to its target range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroStatus {
    /// Below the lower bound
    Low,
    /// Inside `[low, high]`
    InRange,
    /// Above the upper bound
    High,
}

/// Target range for a macro's share of meal calories (fractions, not percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRange {
    /// Lower bound (inclusive)
    pub low: f64,
    /// Upper bound (inclusive)
    pub high: f64,
}

impl MacroRange {
    /// Create a range from fraction bounds
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Classify a calorie fraction against this range
    #[must_use]
    pub fn classify(&self, pct: f64) -> MacroStatus {
        if pct < self.low {
            MacroStatus::Low
        } else if pct > self.high {
            MacroStatus::High
        } else {
            MacroStatus::InRange
        }
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.low) || !(0.0..=1.0).contains(&self.high) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{label} bounds must be fractions between 0.0 and 1.0, got [{}, {}]",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(ConfigError::InvalidRange(format!(
                "{label} low bound {} exceeds high bound {}",
                self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Macro target ranges for one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRanges {
    /// Protein share of calories
    pub protein: MacroRange,
    /// Fat share of calories
    pub fat: MacroRange,
    /// Carbohydrate share of calories
    pub carbs: MacroRange,
}

/// Everything the scorer needs to know about one goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Sub-score weights (must sum to 1.0)
    pub weights: ScoreWeights,
    /// Macro percentage-of-calories targets
    pub macro_ranges: MacroRanges,
    /// Protein share of calories that earns full density credit
    pub protein_density_target: f64,
}

impl GoalProfile {
    fn validate(&self, goal: NutritionGoal) -> Result<(), ConfigError> {
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights { goal, sum });
        }
        let weights = [
            self.weights.calorie,
            self.weights.protein,
            self.weights.macro_balance,
        ];
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{goal} weights must each be between 0.0 and 1.0"
            )));
        }
        if !(self.protein_density_target > 0.0 && self.protein_density_target <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "{goal} protein density target must be in (0.0, 1.0], got {}",
                self.protein_density_target
            )));
        }
        self.macro_ranges
            .protein
            .validate(&format!("{goal} protein range"))?;
        self.macro_ranges.fat.validate(&format!("{goal} fat range"))?;
        self.macro_ranges
            .carbs
            .validate(&format!("{goal} carbs range"))?;
        Ok(())
    }
}

/// Goal profiles keyed by [`NutritionGoal`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProfilesConfig {
    /// Weight-loss profile
    pub lose_weight: GoalProfile,
    /// Maintenance profile
    pub maintain: GoalProfile,
    /// Muscle-gain profile
    pub gain_muscle: GoalProfile,
}

impl Default for GoalProfilesConfig {
    fn default() -> Self {
        Self {
            lose_weight: GoalProfile {
                weights: ScoreWeights {
                    calorie: 0.50,
                    protein: 0.35,
                    macro_balance: 0.15,
                },
                macro_ranges: MacroRanges {
                    protein: MacroRange::new(0.30, 0.40),
                    fat: MacroRange::new(0.25, 0.35),
                    carbs: MacroRange::new(0.25, 0.40),
                },
                protein_density_target: 0.30,
            },
            maintain: GoalProfile {
                weights: ScoreWeights {
                    calorie: 0.40,
                    protein: 0.30,
                    macro_balance: 0.30,
                },
                macro_ranges: MacroRanges {
                    protein: MacroRange::new(0.20, 0.30),
                    fat: MacroRange::new(0.25, 0.35),
                    carbs: MacroRange::new(0.40, 0.55),
                },
                protein_density_target: 0.20,
            },
            gain_muscle: GoalProfile {
                weights: ScoreWeights {
                    calorie: 0.30,
                    protein: 0.50,
                    macro_balance: 0.20,
                },
                macro_ranges: MacroRanges {
                    protein: MacroRange::new(0.25, 0.35),
                    fat: MacroRange::new(0.20, 0.30),
                    carbs: MacroRange::new(0.40, 0.55),
                },
                protein_density_target: 0.30,
            },
        }
    }
}

impl GoalProfilesConfig {
    /// Profile for a goal
    #[must_use]
    pub const fn profile_for(&self, goal: NutritionGoal) -> &GoalProfile {
        match goal {
            NutritionGoal::LoseWeight => &self.lose_weight,
            NutritionGoal::Maintain => &self.maintain,
            NutritionGoal::GainMuscle => &self.gain_muscle,
        }
    }
}

/// Ideal share of daily calories for each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSharesConfig {
    /// Breakfast: 0.25
    pub breakfast: f64,
    /// Lunch: 0.30
    pub lunch: f64,
    /// Dinner: 0.30
    pub dinner: f64,
    /// Snack: 0.15
    pub snack: f64,
    /// Unrecognized or missing meal type: 0.30
    pub default_share: f64,
}

impl Default for MealSharesConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.30,
            dinner: 0.30,
            snack: 0.15,
            default_share: 0.30,
        }
    }
}

impl MealSharesConfig {
    /// Share of the daily calorie target this meal type should represent
    #[must_use]
    pub fn share_for(&self, meal_type: &MealType) -> f64 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
            MealType::Other(_) | MealType::Unspecified => self.default_share,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let shares = [
            ("breakfast", self.breakfast),
            ("lunch", self.lunch),
            ("dinner", self.dinner),
            ("snack", self.snack),
            ("default", self.default_share),
        ];

        for (name, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} meal share must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Protein alignment sub-score parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinScoringConfig {
    /// Fraction of the daily protein target above which a meal earns nothing extra
    pub amount_cap_fraction: f64,
    /// Fraction of the daily protein target that earns full amount credit
    pub full_credit_fraction: f64,
    /// Blend weight of the amount score
    pub amount_weight: f64,
    /// Blend weight of the density score
    pub density_weight: f64,
    /// Floor for the daily protein target denominator (grams)
    pub min_daily_target_g: f64,
}

impl Default for ProteinScoringConfig {
    fn default() -> Self {
        Self {
            amount_cap_fraction: 0.5,
            full_credit_fraction: 0.25,
            amount_weight: 0.4,
            density_weight: 0.6,
            min_daily_target_g: 1.0,
        }
    }
}

/// Lower bounds (inclusive) of each grade band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeThresholds {
    /// Excellent at or above: 85
    pub excellent: u8,
    /// Good at or above: 70
    pub good: u8,
    /// Okay at or above: 50
    pub okay: u8,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: 85,
            good: 70,
            okay: 50,
        }
    }
}

/// Sub-score tiers used to pick explanation wording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationThresholds {
    /// Positive wording at or above
    pub positive: f64,
    /// Neutral wording at or above, negative below
    pub neutral: f64,
}

impl Default for ExplanationThresholds {
    fn default() -> Self {
        Self {
            positive: 85.0,
            neutral: 50.0,
        }
    }
}

/// Share of daily calories from each macro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share
    pub protein: f64,
    /// Fat share
    pub fat: f64,
    /// Carbohydrate share
    pub carbs: f64,
}

/// Daily target derivation parameters
///
/// BMR uses Mifflin-St Jeor (Mifflin et al. 1990, DOI: 10.1093/ajcn/51.2.241).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTargetsConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also used when gender is unknown
    pub msj_female_constant: f64,
    /// Sedentary activity factor: 1.2
    pub sedentary_factor: f64,
    /// Lightly active factor: 1.375
    pub lightly_active_factor: f64,
    /// Moderately active factor: 1.55
    pub moderately_active_factor: f64,
    /// Very active factor: 1.725
    pub very_active_factor: f64,
    /// Calorie adjustment for weight loss (kcal/day)
    pub lose_weight_adjustment_kcal: f64,
    /// Calorie adjustment for muscle gain (kcal/day)
    pub gain_muscle_adjustment_kcal: f64,
    /// Minimum daily calorie target
    pub min_daily_calories: f64,
    /// Protein g/kg when losing weight or gaining muscle
    pub protein_g_per_kg_active_goal: f64,
    /// Protein g/kg when maintaining
    pub protein_g_per_kg_maintain: f64,
    /// Fat share of the daily calorie target
    pub fat_share: f64,
    /// Share of the day a single meal is assumed to cover when inferring targets from it
    pub fallback_meal_share: f64,
    /// Macro split used for fallback targets when losing weight
    pub fallback_lose_weight: MacroSplit,
    /// Macro split used for fallback targets when gaining muscle
    pub fallback_gain_muscle: MacroSplit,
    /// Macro split used for fallback targets when maintaining
    pub fallback_maintain: MacroSplit,
}

impl Default for DailyTargetsConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            sedentary_factor: 1.2,
            lightly_active_factor: 1.375,
            moderately_active_factor: 1.55,
            very_active_factor: 1.725,
            lose_weight_adjustment_kcal: -500.0,
            gain_muscle_adjustment_kcal: 250.0,
            min_daily_calories: 1200.0,
            protein_g_per_kg_active_goal: 1.6,
            protein_g_per_kg_maintain: 1.2,
            fat_share: 0.25,
            fallback_meal_share: 0.3,
            // Midpoints of each goal's macro ranges
            fallback_lose_weight: MacroSplit {
                protein: 0.35,
                fat: 0.30,
                carbs: 0.325,
            },
            fallback_gain_muscle: MacroSplit {
                protein: 0.30,
                fat: 0.25,
                carbs: 0.475,
            },
            fallback_maintain: MacroSplit {
                protein: 0.25,
                fat: 0.30,
                carbs: 0.45,
            },
        }
    }
}

impl DailyTargetsConfig {
    /// Fallback macro split for a goal
    #[must_use]
    pub const fn fallback_split(&self, goal: NutritionGoal) -> &MacroSplit {
        match goal {
            NutritionGoal::LoseWeight => &self.fallback_lose_weight,
            NutritionGoal::GainMuscle => &self.fallback_gain_muscle,
            NutritionGoal::Maintain => &self.fallback_maintain,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.msj_weight_coef <= 0.0 || self.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive".to_owned(),
            ));
        }
        if self.sedentary_factor < 1.0
            || self.sedentary_factor >= self.lightly_active_factor
            || self.lightly_active_factor >= self.moderately_active_factor
            || self.moderately_active_factor >= self.very_active_factor
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be >= 1.0 and in ascending order".to_owned(),
            ));
        }
        if !(self.fallback_meal_share > 0.0 && self.fallback_meal_share <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fallback meal share must be in (0.0, 1.0], got {}",
                self.fallback_meal_share
            )));
        }
        if !(0.0..1.0).contains(&self.fat_share) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "fat share must be in [0.0, 1.0), got {}",
                self.fat_share
            )));
        }
        Ok(())
    }
}

/// Main scoring configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Per-goal weights, macro ranges and density targets
    pub goals: GoalProfilesConfig,
    /// Ideal meal share of daily calories
    pub meal_shares: MealSharesConfig,
    /// Protein alignment parameters
    pub protein: ProteinScoringConfig,
    /// Grade band thresholds
    pub grades: GradeThresholds,
    /// Explanation wording tiers
    pub explanation: ExplanationThresholds,
    /// Daily target derivation parameters
    pub daily_targets: DailyTargetsConfig,
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load meal scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Target profile for a goal
    #[must_use]
    pub const fn profile_for(&self, goal: NutritionGoal) -> &GoalProfile {
        self.goals.profile_for(goal)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when goal weights do not sum to 1.0, a range is
    /// inverted or outside `[0, 1]`, a meal share is out of range, or grade
    /// thresholds are not strictly descending
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in NutritionGoal::ALL {
            self.profile_for(goal).validate(goal)?;
        }

        self.meal_shares.validate()?;

        let grades = &self.grades;
        if grades.excellent > 100 || grades.excellent <= grades.good || grades.good <= grades.okay
        {
            return Err(ConfigError::InvalidRange(format!(
                "grade thresholds must satisfy 100 >= excellent > good > okay, got {}/{}/{}",
                grades.excellent, grades.good, grades.okay
            )));
        }

        if self.explanation.neutral >= self.explanation.positive {
            return Err(ConfigError::InvalidRange(
                "explanation neutral threshold must be < positive threshold".to_owned(),
            ));
        }

        let protein = &self.protein;
        if (protein.amount_weight + protein.density_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::ValueOutOfRange(
                "protein amount and density weights must sum to 1.0".to_owned(),
            ));
        }
        if protein.full_credit_fraction <= 0.0 || protein.min_daily_target_g <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "protein full-credit fraction and target floor must be positive".to_owned(),
            ));
        }

        self.daily_targets.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Meal share overrides
        Self::apply_env_var(
            "MEAL_SCORING_SHARE_BREAKFAST",
            &mut self.meal_shares.breakfast,
        )?;
        Self::apply_env_var("MEAL_SCORING_SHARE_LUNCH", &mut self.meal_shares.lunch)?;
        Self::apply_env_var("MEAL_SCORING_SHARE_DINNER", &mut self.meal_shares.dinner)?;
        Self::apply_env_var("MEAL_SCORING_SHARE_SNACK", &mut self.meal_shares.snack)?;
        Self::apply_env_var(
            "MEAL_SCORING_SHARE_DEFAULT",
            &mut self.meal_shares.default_share,
        )?;

        // Grade band overrides
        Self::apply_env_var("MEAL_SCORING_GRADE_EXCELLENT", &mut self.grades.excellent)?;
        Self::apply_env_var("MEAL_SCORING_GRADE_GOOD", &mut self.grades.good)?;
        Self::apply_env_var("MEAL_SCORING_GRADE_OKAY", &mut self.grades.okay)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_goal_weights_sum_to_one() {
        let config = ScoringConfig::default();
        for goal in NutritionGoal::ALL {
            let sum = config.profile_for(goal).weights.sum();
            assert!((sum - 1.0).abs() < f64::EPSILON, "{goal} weights sum to {sum}");
        }
    }

    #[test]
    fn test_meal_share_lookup() {
        let shares = MealSharesConfig::default();
        assert!((shares.share_for(&MealType::Breakfast) - 0.25).abs() < f64::EPSILON);
        assert!((shares.share_for(&MealType::Snack) - 0.15).abs() < f64::EPSILON);
        assert!(
            (shares.share_for(&MealType::Other("BRUNCH".to_owned())) - 0.30).abs() < f64::EPSILON
        );
        assert!((shares.share_for(&MealType::Unspecified) - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_range_classify_is_inclusive() {
        let range = MacroRange::new(0.25, 0.35);
        assert_eq!(range.classify(0.25), MacroStatus::InRange);
        assert_eq!(range.classify(0.35), MacroStatus::InRange);
        assert_eq!(range.classify(0.2499), MacroStatus::Low);
        assert_eq!(range.classify(0.3501), MacroStatus::High);
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let mut config = ScoringConfig::default();
        config.goals.gain_muscle.weights.protein = 0.6;
        let result = config.validate();
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidWeights {
                    goal: NutritionGoal::GainMuscle,
                    sum,
                }) if (sum - 1.1).abs() < 1e-9
            ),
            "expected InvalidWeights, got {result:?}"
        );
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut config = ScoringConfig::default();
        config.goals.maintain.macro_ranges.carbs = MacroRange::new(0.6, 0.4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unordered_grades() {
        let mut config = ScoringConfig::default();
        config.grades.good = 90;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
