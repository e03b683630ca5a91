//! Macro calculation tool
//!
//! Validates raw tool input, invokes the calculator, and assembles the
//! response for the client to render. All range and enum checking lives
//! here; the calculator itself accepts whatever it is given.

use serde::Serialize;
use thiserror::Error;

use crate::models::{ActivityLevel, Gender, Goal, MacroResult, UserInput};
use crate::nutrition::{self, factors};

/// Accepted age range in years
pub const AGE_RANGE: (f64, f64) = (15.0, 100.0);
/// Accepted height range in centimeters
pub const HEIGHT_CM_RANGE: (f64, f64) = (100.0, 250.0);
/// Accepted weight range in kilograms
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 200.0);

/// Input rejection reasons
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown gender '{0}': expected male or female")]
    UnknownGender(String),

    #[error("unknown activity level '{0}': expected sedentary, light, moderate, heavy, or athlete")]
    UnknownActivityLevel(String),

    #[error("unknown goal '{0}': expected loss, maintenance, or gain")]
    UnknownGoal(String),

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} {value} is outside the supported range {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Parse and range-check raw tool parameters into a calculator input
pub fn parse_input(
    gender: &str,
    age: f64,
    height_cm: f64,
    weight_kg: f64,
    activity_level: &str,
    goal: &str,
) -> Result<UserInput, InputError> {
    let gender =
        Gender::from_str(gender).ok_or_else(|| InputError::UnknownGender(gender.to_string()))?;
    let activity_level = ActivityLevel::from_str(activity_level)
        .ok_or_else(|| InputError::UnknownActivityLevel(activity_level.to_string()))?;
    let goal = Goal::from_str(goal).ok_or_else(|| InputError::UnknownGoal(goal.to_string()))?;

    Ok(UserInput {
        gender,
        age: check_range("age", age, AGE_RANGE)?,
        height_cm: check_range("height_cm", height_cm, HEIGHT_CM_RANGE)?,
        weight_kg: check_range("weight_kg", weight_kg, WEIGHT_KG_RANGE)?,
        activity_level,
        goal,
    })
}

/// One macro's share of the daily targets
#[derive(Debug, Serialize)]
pub struct MacroBreakdown {
    pub grams: i64,
    pub kcal: i64,
    pub percent_of_macro_kcal: f64,
}

/// Response for calculate_macros
#[derive(Debug, Serialize)]
pub struct CalculateMacrosResponse {
    /// The validated profile the targets were computed from
    pub profile: UserInput,
    pub bmr: i64,             // kcal/day
    pub tdee: i64,            // kcal/day
    pub target_calories: i64, // kcal/day
    pub protein: MacroBreakdown,
    pub fat: MacroBreakdown,
    pub carbs: MacroBreakdown,
}

fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl CalculateMacrosResponse {
    fn from_result(profile: UserInput, result: MacroResult) -> Self {
        let split = result.split();
        Self {
            profile,
            bmr: result.bmr,
            tdee: result.tdee,
            target_calories: result.target_calories,
            protein: MacroBreakdown {
                grams: result.protein,
                kcal: result.protein_kcal(),
                percent_of_macro_kcal: round_percent(split.protein_percent),
            },
            fat: MacroBreakdown {
                grams: result.fat,
                kcal: result.fat_kcal(),
                percent_of_macro_kcal: round_percent(split.fat_percent),
            },
            carbs: MacroBreakdown {
                grams: result.carbs,
                kcal: result.carbs_kcal(),
                percent_of_macro_kcal: round_percent(split.carbs_percent),
            },
        }
    }
}

/// Run the calculation for an already-validated profile
pub fn calculate(input: UserInput) -> CalculateMacrosResponse {
    let result = nutrition::calculate_macros(&input);
    CalculateMacrosResponse::from_result(input, result)
}

/// One selectable option for a categorical field
#[derive(Debug, Serialize)]
pub struct GenderOption {
    pub id: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ActivityOption {
    pub id: &'static str,
    pub description: &'static str,
    pub multiplier: f64,
}

#[derive(Debug, Serialize)]
pub struct GoalOption {
    pub id: &'static str,
    pub description: &'static str,
    pub kcal_adjustment: i64,
}

/// Response for list_profile_options
#[derive(Debug, Serialize)]
pub struct ProfileOptionsResponse {
    pub genders: Vec<GenderOption>,
    pub activity_levels: Vec<ActivityOption>,
    pub goals: Vec<GoalOption>,
    pub age_range: (f64, f64),
    pub height_cm_range: (f64, f64),
    pub weight_kg_range: (f64, f64),
}

/// Enumerate the accepted identifiers, descriptions, and factor values
pub fn profile_options() -> ProfileOptionsResponse {
    ProfileOptionsResponse {
        genders: Gender::ALL
            .iter()
            .map(|g| GenderOption { id: g.as_str() })
            .collect(),
        activity_levels: ActivityLevel::ALL
            .iter()
            .map(|level| ActivityOption {
                id: level.as_str(),
                description: level.description(),
                multiplier: factors::activity_multiplier(*level),
            })
            .collect(),
        goals: Goal::ALL
            .iter()
            .map(|goal| GoalOption {
                id: goal.as_str(),
                description: goal.description(),
                kcal_adjustment: factors::goal_adjustment_kcal(*goal) as i64,
            })
            .collect(),
        age_range: AGE_RANGE,
        height_cm_range: HEIGHT_CM_RANGE,
        weight_kg_range: WEIGHT_KG_RANGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        let input = parse_input("male", 25.0, 175.0, 75.0, "moderate", "maintenance").unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.activity_level, ActivityLevel::Moderate);
        assert_eq!(input.goal, Goal::Maintenance);
        assert_eq!(input.weight_kg, 75.0);
    }

    #[test]
    fn test_parse_accepts_range_boundaries() {
        assert!(parse_input("female", 15.0, 100.0, 30.0, "sedentary", "loss").is_ok());
        assert!(parse_input("female", 100.0, 250.0, 200.0, "athlete", "gain").is_ok());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            parse_input("male", 14.9, 175.0, 75.0, "moderate", "maintenance"),
            Err(InputError::OutOfRange { field: "age", .. })
        ));
        assert!(matches!(
            parse_input("male", 25.0, 250.1, 75.0, "moderate", "maintenance"),
            Err(InputError::OutOfRange {
                field: "height_cm",
                ..
            })
        ));
        assert!(matches!(
            parse_input("male", 25.0, 175.0, 29.0, "moderate", "maintenance"),
            Err(InputError::OutOfRange {
                field: "weight_kg",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_input("male", f64::NAN, 175.0, 75.0, "moderate", "maintenance"),
            Err(InputError::NotFinite { field: "age" })
        ));
        assert!(matches!(
            parse_input("male", 25.0, f64::INFINITY, 75.0, "moderate", "maintenance"),
            Err(InputError::NotFinite { field: "height_cm" })
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_identifiers() {
        assert!(matches!(
            parse_input("nonbinary", 25.0, 175.0, 75.0, "moderate", "maintenance"),
            Err(InputError::UnknownGender(_))
        ));
        assert!(matches!(
            parse_input("male", 25.0, 175.0, 75.0, "extreme", "maintenance"),
            Err(InputError::UnknownActivityLevel(_))
        ));
        assert!(matches!(
            parse_input("male", 25.0, 175.0, 75.0, "moderate", "bulk"),
            Err(InputError::UnknownGoal(_))
        ));
    }

    #[test]
    fn test_calculate_response_breakdown() {
        let input = parse_input("male", 25.0, 175.0, 75.0, "moderate", "maintenance").unwrap();
        let response = calculate(input);
        assert_eq!(response.target_calories, 2672);
        assert_eq!(response.protein.grams, 150);
        assert_eq!(response.protein.kcal, 600);
        assert_eq!(response.fat.grams, 60);
        assert_eq!(response.fat.kcal, 540);
        assert_eq!(response.carbs.grams, 383);
        assert_eq!(response.carbs.kcal, 1532);
        let percent_sum = response.protein.percent_of_macro_kcal
            + response.fat.percent_of_macro_kcal
            + response.carbs.percent_of_macro_kcal;
        assert!((percent_sum - 100.0).abs() < 0.2);
    }

    #[test]
    fn test_profile_options_complete() {
        let options = profile_options();
        assert_eq!(options.genders.len(), 2);
        assert_eq!(options.activity_levels.len(), 5);
        assert_eq!(options.goals.len(), 3);
        assert_eq!(options.activity_levels[0].id, "sedentary");
        assert_eq!(options.activity_levels[0].multiplier, 1.2);
        assert_eq!(options.goals[0].kcal_adjustment, -500);
    }
}
