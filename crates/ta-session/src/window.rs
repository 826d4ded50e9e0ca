//! Daily attendance window.
//!
//! Attendance is accepted between `start` and `end` (both inclusive, whole
//! minutes since midnight).  The countdown runs to the first second of the
//! `end` minute; past that the window reads as closed until the next day.

use std::fmt;

use chrono::{NaiveTime, TimeDelta, Timelike};

use ta_core::config::WindowSettings;
use ta_core::time::{MINUTES_PER_DAY, minutes_of};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_DAY: i64 = MINUTES_PER_DAY as i64 * SECS_PER_MINUTE;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceWindow {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl AttendanceWindow {
    pub fn new(start_minutes: u32, end_minutes: u32) -> Self {
        Self { start_minutes, end_minutes }
    }

    pub fn from_settings(settings: &WindowSettings) -> Self {
        Self::new(
            settings.start.minutes_since_midnight(),
            settings.end.minutes_since_midnight(),
        )
    }

    /// `true` if `now` (seconds ignored) is inside the window.
    pub fn contains(&self, now: NaiveTime) -> bool {
        let m = minutes_of(now);
        self.start_minutes <= m && m <= self.end_minutes
    }

    /// Time left until the window closes.
    pub fn countdown(&self, now: NaiveTime) -> Countdown {
        let end = self.end_minutes as i64 * SECS_PER_MINUTE;
        let now = now.num_seconds_from_midnight() as i64;
        if now > end {
            return Countdown::Closed;
        }
        let left = end - now;
        Countdown::Remaining {
            minutes: (left / SECS_PER_MINUTE) as u32,
            seconds: (left % SECS_PER_MINUTE) as u32,
        }
    }

    /// How long until the window next opens: later today if `now` is before
    /// the start, otherwise tomorrow.
    pub fn until_next_open(&self, now: NaiveTime) -> TimeDelta {
        let start = self.start_minutes as i64 * SECS_PER_MINUTE;
        let now = now.num_seconds_from_midnight() as i64;
        let secs = if now < start {
            start - now
        } else {
            SECS_PER_DAY - now + start
        };
        TimeDelta::seconds(secs)
    }
}

impl From<&WindowSettings> for AttendanceWindow {
    fn from(settings: &WindowSettings) -> Self {
        Self::from_settings(settings)
    }
}

// ── Countdown ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Countdown {
    Remaining { minutes: u32, seconds: u32 },
    Closed,
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Remaining { minutes, seconds } => write!(f, "{minutes}:{seconds:02}"),
            Countdown::Closed => f.write_str("Attendance window closed"),
        }
    }
}
