//! Timetable entry types: `TimeRange` and `ScheduleEntry`.
//!
//! # Active window
//!
//! Each entry occupies a closed window of minutes-since-midnight.  Under
//! [`WindowPolicy::FixedHour`] the window is `[start, start + 60]` and the
//! declared end time is display-only; under [`WindowPolicy::DeclaredEnd`] it
//! is `[start, end]`.  Both bounds are inclusive, so a back-to-back pair of
//! entries can both claim the minute they share; resolution then picks the
//! earlier one in sequence order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use ta_core::time::MINUTES_PER_HOUR;
use ta_core::{ClockTime, CoreError, CoreResult, EntryId, WindowPolicy};

// ── TimeRange ─────────────────────────────────────────────────────────────────

/// A `"<start> - <end>"` pair of 12-hour clock times.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeRange {
    /// Parse `"9:00 AM - 10:00 AM"`.  Both halves must be valid
    /// [`ClockTime`]s; the separator is `" - "`.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let (start, end) = s.split_once(" - ").ok_or_else(|| {
            CoreError::Parse(format!("{s:?} is not a \"<start> - <end>\" time range"))
        })?;
        Ok(Self {
            start: ClockTime::parse(start)?,
            end: ClockTime::parse(end)?,
        })
    }

    #[inline]
    pub fn start_minutes(&self) -> u32 {
        self.start.minutes_since_midnight()
    }

    #[inline]
    pub fn end_minutes(&self) -> u32 {
        self.end.minutes_since_midnight()
    }

    /// Inclusive `(from, to)` bounds of the active window under `policy`.
    pub fn window(&self, policy: WindowPolicy) -> (u32, u32) {
        let start = self.start_minutes();
        match policy {
            WindowPolicy::FixedHour => (start, start + MINUTES_PER_HOUR),
            WindowPolicy::DeclaredEnd => (start, self.end_minutes()),
        }
    }

    /// `true` if `now_minutes` lies inside the window (both ends inclusive).
    /// A declared end earlier than the start yields an empty window.
    #[inline]
    pub fn contains(&self, now_minutes: u32, policy: WindowPolicy) -> bool {
        let (from, to) = self.window(policy);
        from <= now_minutes && now_minutes <= to
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeRange {
    type Error = CoreError;
    fn try_from(s: String) -> CoreResult<Self> {
        Self::parse(&s)
    }
}

impl From<TimeRange> for String {
    fn from(r: TimeRange) -> String {
        r.to_string()
    }
}

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One class slot in a day's timetable.  Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub time: TimeRange,
    pub class: String,
    pub subject: String,
    pub room: String,
}

impl ScheduleEntry {
    /// Build an entry from its textual parts, parsing `time` strictly.
    pub fn parse(
        id: impl Into<EntryId>,
        time: &str,
        class: impl Into<String>,
        subject: impl Into<String>,
        room: impl Into<String>,
    ) -> CoreResult<Self> {
        Ok(Self {
            id: id.into(),
            time: TimeRange::parse(time)?,
            class: class.into(),
            subject: subject.into(),
            room: room.into(),
        })
    }

    #[inline]
    pub fn start_minutes(&self) -> u32 {
        self.time.start_minutes()
    }
}
