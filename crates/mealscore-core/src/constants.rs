// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Macronutrient energy density and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

    /// Total energy from macronutrient grams
    #[must_use]
    pub fn macro_calories(protein_g: f64, fat_g: f64, carbs_g: f64) -> f64 {
        fat_g.mul_add(
            FAT_KCAL_PER_GRAM,
            protein_g.mul_add(PROTEIN_KCAL_PER_GRAM, carbs_g * CARBS_KCAL_PER_GRAM),
        )
    }
}

/// Service names used in structured logging
pub mod service_names {
    /// Default service name for the meal scoring engine
    pub const MEALSCORE: &str = "mealscore";
}

#[cfg(test)]
mod tests {
    use super::energy::macro_calories;

    #[test]
    fn test_macro_calories_uses_atwater_factors() {
        // 10g protein (40) + 10g fat (90) + 10g carbs (40)
        assert!((macro_calories(10.0, 10.0, 10.0) - 170.0).abs() < 1e-9);
        assert!(macro_calories(0.0, 0.0, 0.0).abs() < f64::EPSILON);
    }
}
