//! Nutrition calculation module
//!
//! The pure daily-target calculation and its constant factor tables.

pub mod calculator;
pub mod factors;

pub use calculator::calculate_macros;
pub use factors::{activity_multiplier, goal_adjustment_kcal};
