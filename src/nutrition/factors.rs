//! Energy factor tables
//!
//! The two read-only lookup tables behind the calculation — activity
//! multipliers and goal adjustments — plus the Atwater energy densities
//! and fixed macro ratios.

use crate::models::{ActivityLevel, Goal};

// ============================================================================
// Activity Multipliers (BMR -> TDEE)
// ============================================================================

/// Multiplier for little or no exercise
pub const MULTIPLIER_SEDENTARY: f64 = 1.2;
/// Multiplier for exercise 1-3 days/week
pub const MULTIPLIER_LIGHT: f64 = 1.375;
/// Multiplier for exercise 3-5 days/week
pub const MULTIPLIER_MODERATE: f64 = 1.55;
/// Multiplier for exercise 6-7 days/week
pub const MULTIPLIER_HEAVY: f64 = 1.725;
/// Multiplier for a physical job or twice-daily training
pub const MULTIPLIER_ATHLETE: f64 = 1.9;

// ============================================================================
// Goal Adjustments (TDEE -> target calories)
// ============================================================================

/// Daily deficit for weight loss (kcal)
pub const ADJUSTMENT_LOSS: f64 = -500.0;
/// No adjustment for maintenance (kcal)
pub const ADJUSTMENT_MAINTENANCE: f64 = 0.0;
/// Daily surplus for muscle gain (kcal)
pub const ADJUSTMENT_GAIN: f64 = 500.0;

// ============================================================================
// Macro Constants
// ============================================================================

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of fat (kcal per gram)
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Protein target per kilogram of bodyweight (grams)
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Fat target per kilogram of bodyweight (grams)
pub const FAT_G_PER_KG: f64 = 0.8;

// ============================================================================
// Lookups
// ============================================================================

/// Get the TDEE multiplier for an activity level
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => MULTIPLIER_SEDENTARY,
        ActivityLevel::Light => MULTIPLIER_LIGHT,
        ActivityLevel::Moderate => MULTIPLIER_MODERATE,
        ActivityLevel::Heavy => MULTIPLIER_HEAVY,
        ActivityLevel::Athlete => MULTIPLIER_ATHLETE,
    }
}

/// Get the daily calorie adjustment for a goal (kcal)
pub fn goal_adjustment_kcal(goal: Goal) -> f64 {
    match goal {
        Goal::Loss => ADJUSTMENT_LOSS,
        Goal::Maintenance => ADJUSTMENT_MAINTENANCE,
        Goal::Gain => ADJUSTMENT_GAIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multiplier_values() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Heavy), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::Athlete), 1.9);
    }

    #[test]
    fn test_activity_multipliers_strictly_increasing() {
        let multipliers: Vec<f64> = ActivityLevel::ALL
            .iter()
            .map(|l| activity_multiplier(*l))
            .collect();
        for pair in multipliers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_goal_adjustment_values() {
        assert_eq!(goal_adjustment_kcal(Goal::Loss), -500.0);
        assert_eq!(goal_adjustment_kcal(Goal::Maintenance), 0.0);
        assert_eq!(goal_adjustment_kcal(Goal::Gain), 500.0);
    }
}
