//! User profile model
//!
//! The biometric input to the macro calculation, and the three categorical
//! fields with their string identifiers and display metadata.

use serde::{Deserialize, Serialize};

/// Biological gender for the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Weekly activity level, scaling BMR up to TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Heavy,
    /// Physical job or twice-daily training
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Heavy,
        ActivityLevel::Athlete,
    ];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Heavy => "heavy",
            ActivityLevel::Athlete => "athlete",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "heavy" => Some(ActivityLevel::Heavy),
            "athlete" => Some(ActivityLevel::Athlete),
            _ => None,
        }
    }

    /// Short description for option listings
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Exercise 1-3 days/week",
            ActivityLevel::Moderate => "Exercise 3-5 days/week",
            ActivityLevel::Heavy => "Exercise 6-7 days/week",
            ActivityLevel::Athlete => "Physical job or 2x training",
        }
    }
}

/// Body composition goal, shifting the calorie target off TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit
    Loss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Loss, Goal::Maintenance, Goal::Gain];

    /// Canonical identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Loss => "loss",
            Goal::Maintenance => "maintenance",
            Goal::Gain => "gain",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "loss" => Some(Goal::Loss),
            "maintenance" => Some(Goal::Maintenance),
            "gain" => Some(Goal::Gain),
            _ => None,
        }
    }

    /// Short description for option listings
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Loss => "Weight Loss (-500 kcal)",
            Goal::Maintenance => "Maintenance (0 kcal)",
            Goal::Gain => "Muscle Gain (+500 kcal)",
        }
    }
}

/// Biometric input for a macro calculation
///
/// The calculator treats every instance as already range-checked; the tool
/// layer owns validation. Numeric fields are finite and non-negative by
/// that contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub gender: Gender,
    pub age: f64,       // years
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}
