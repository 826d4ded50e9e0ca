//! Validation of user-typed form values before they reach the core.

use chrono::NaiveTime;

use ta_core::geo::check_radius;
use ta_core::{CoreError, CoreResult};

/// Parse the radius field: a non-negative, finite number of metres.
pub fn parse_radius_input(input: &str) -> CoreResult<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::InvalidInput("radius is required".into()));
    }
    let radius: f64 = input
        .parse()
        .map_err(|_| CoreError::InvalidInput(format!("{input:?} is not a number")))?;
    check_radius(radius)
}

/// Parse the attendance time field (`"HH:MM"`, 24-hour, as produced by a
/// time picker).
pub fn parse_attendance_time(input: &str) -> CoreResult<NaiveTime> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::InvalidInput("attendance time is required".into()));
    }
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|e| CoreError::Parse(format!("{input:?} is not an HH:MM time: {e}")))
}
