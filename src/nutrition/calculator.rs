//! Daily energy and macro calculation
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, goal-adjusted calorie
//! target, and a fixed-ratio protein/fat split with carbs taking the
//! remaining calories.

use super::factors::{
    activity_multiplier, goal_adjustment_kcal, FAT_G_PER_KG, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN, PROTEIN_G_PER_KG,
};
use crate::models::{Gender, MacroResult, UserInput};

/// Calculate daily energy targets and macro split for a profile.
///
/// Pure and total: never fails, allocates nothing, touches only its input
/// and the factor tables. Range checking is the caller's job; degenerate
/// input produces degenerate but finite output (a negative weight yields a
/// negative BMR, not a panic). Each output field is rounded independently
/// from its own unrounded value, halves away from zero.
pub fn calculate_macros(input: &UserInput) -> MacroResult {
    // Mifflin-St Jeor: (10 x weight) + (6.25 x height) - (5 x age), +5 male / -161 female
    let bmr = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age
        + match input.gender {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        };

    let tdee = bmr * activity_multiplier(input.activity_level);
    let target_calories = tdee + goal_adjustment_kcal(input.goal);

    // Protein and fat are fixed per-kilogram ratios, independent of the
    // calorie target.
    let protein = PROTEIN_G_PER_KG * input.weight_kg;
    let fat = FAT_G_PER_KG * input.weight_kg;

    // Carbs fill the calories left after protein and fat, floored at zero.
    // Past the floor, macro calories exceed the target; that is accepted,
    // not corrected.
    let remaining = target_calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
    let carbs = (remaining / KCAL_PER_G_CARBS).max(0.0);

    MacroResult {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        target_calories: target_calories.round() as i64,
        protein: protein.round() as i64,
        fat: fat.round() as i64,
        carbs: carbs.round() as i64,
    }
}
