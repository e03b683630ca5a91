//! MacroCal Status Tool
//!
//! Runtime status information and the usage guide served to AI clients.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage guide for AI assistants
pub const MACRO_INSTRUCTIONS: &str = r#"
# MacroCal Usage Instructions

MacroCal estimates daily calorie targets and a macronutrient split from
basic biometrics. One tool does the work: `calculate_macros`. Nothing is
stored between calls.

## Collecting Input

Ask the user for all six fields before calling the tool:

| Field | Accepted values |
|-------|-----------------|
| gender | "male" or "female" |
| age | 15-100 years |
| height_cm | 100-250 cm |
| weight_kg | 30-200 kg |
| activity_level | sedentary, light, moderate, heavy, athlete |
| goal | loss, maintenance, gain |

Call `list_profile_options` for the activity/goal descriptions to present
as choices. If the user gives imperial units, convert before calling
(1 in = 2.54 cm, 1 lb = 0.453592 kg) and confirm the converted values.

## What the Numbers Mean

- **bmr** - Basal Metabolic Rate: estimated calories burned at rest.
- **tdee** - Total Daily Energy Expenditure: BMR scaled by activity.
- **target_calories** - TDEE shifted by the goal (-500 loss, +500 gain).
- **protein / fat / carbs** - grams per day. Protein is 2 g/kg and fat is
  0.8 g/kg of bodyweight; carbs fill the remaining calories.

## Presenting Results

Lead with target_calories, then the three macro gram targets. Each macro
carries its calorie contribution and percentage share for a split chart.

## Edge Cases

- Carbs are floored at zero. For heavy bodyweights on a deficit the
  protein and fat calories alone can exceed the target; tell the user the
  macros overshoot the calorie target rather than hiding it.
- The estimate uses the Mifflin-St Jeor equation only. It is a starting
  point, not medical advice; suggest adjusting from real-world results.
"#;

/// Runtime status snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Calculations served since startup (in-memory, not persisted)
    pub calculations_served: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    calculations_served: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            calculations_served: 0,
        }
    }

    /// Count a served calculation
    pub fn record_calculation(&mut self) {
        self.calculations_served += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> ServiceStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            calculations_served: self.calculations_served,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_counter() {
        let mut tracker = StatusTracker::new();
        assert_eq!(tracker.get_status().calculations_served, 0);
        tracker.record_calculation();
        tracker.record_calculation();
        assert_eq!(tracker.get_status().calculations_served, 2);
    }

    #[test]
    fn test_status_reports_process() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status();
        assert_eq!(status.process_id, std::process::id());
        assert!(!status.started_at.is_empty());
    }
}
