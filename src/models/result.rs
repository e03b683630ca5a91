//! Calculation result model
//!
//! The rounded daily targets returned by the calculator, with derived
//! views used by the presentation layer.

use serde::{Deserialize, Serialize};

use crate::nutrition::factors::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Daily energy targets and macro split, all fields rounded to integers
///
/// Created fresh per calculation; carries no identity or lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroResult {
    pub bmr: i64,             // kcal/day
    pub tdee: i64,            // kcal/day
    pub target_calories: i64, // kcal/day
    pub protein: i64,         // grams/day
    pub fat: i64,             // grams/day
    pub carbs: i64,           // grams/day
}

/// Percentage split of macro calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein_percent: f64,
    pub fat_percent: f64,
    pub carbs_percent: f64,
}

impl MacroResult {
    /// Calories contributed by the protein target
    pub fn protein_kcal(&self) -> i64 {
        (self.protein as f64 * KCAL_PER_G_PROTEIN) as i64
    }

    /// Calories contributed by the fat target
    pub fn fat_kcal(&self) -> i64 {
        (self.fat as f64 * KCAL_PER_G_FAT) as i64
    }

    /// Calories contributed by the carbohydrate target
    pub fn carbs_kcal(&self) -> i64 {
        (self.carbs as f64 * KCAL_PER_G_CARBS) as i64
    }

    /// Total calories across the three macros
    ///
    /// May exceed `target_calories` when the carb floor was hit.
    pub fn macro_kcal_total(&self) -> i64 {
        self.protein_kcal() + self.fat_kcal() + self.carbs_kcal()
    }

    /// Percentage of macro calories contributed by each macro
    ///
    /// All zeros when the macro total is zero.
    pub fn split(&self) -> MacroSplit {
        let total = self.macro_kcal_total();
        if total == 0 {
            return MacroSplit {
                protein_percent: 0.0,
                fat_percent: 0.0,
                carbs_percent: 0.0,
            };
        }
        let total = total as f64;
        MacroSplit {
            protein_percent: self.protein_kcal() as f64 / total * 100.0,
            fat_percent: self.fat_kcal() as f64 / total * 100.0,
            carbs_percent: self.carbs_kcal() as f64 / total * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MacroResult {
        MacroResult {
            bmr: 1724,
            tdee: 2672,
            target_calories: 2672,
            protein: 150,
            fat: 60,
            carbs: 383,
        }
    }

    #[test]
    fn test_macro_kcal_contributions() {
        let result = sample();
        assert_eq!(result.protein_kcal(), 600);
        assert_eq!(result.fat_kcal(), 540);
        assert_eq!(result.carbs_kcal(), 1532);
        assert_eq!(result.macro_kcal_total(), 2672);
    }

    #[test]
    fn test_split_sums_to_hundred() {
        let split = sample().split();
        let sum = split.protein_percent + split.fat_percent + split.carbs_percent;
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(split.carbs_percent > split.protein_percent);
    }

    #[test]
    fn test_split_all_zero_macros() {
        let result = MacroResult {
            bmr: 0,
            tdee: 0,
            target_calories: 0,
            protein: 0,
            fat: 0,
            carbs: 0,
        };
        let split = result.split();
        assert_eq!(split.protein_percent, 0.0);
        assert_eq!(split.fat_percent, 0.0);
        assert_eq!(split.carbs_percent, 0.0);
    }
}
