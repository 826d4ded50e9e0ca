//! Wall-clock time model.
//!
//! # Design
//!
//! All schedule arithmetic is done in whole minutes since local midnight
//! (`u32`, 0..1440).  Callers read the wall clock once (usually through
//! `chrono::Local`) and pass the resulting minute count down; nothing below
//! this module looks at the system clock.
//!
//! Timetables express times as 12-hour strings (`"9:00 AM"`).  [`ClockTime`]
//! is the strict parsed form of one such string.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Minutes since midnight for a `chrono` wall-clock time.  Seconds are
/// truncated.
#[inline]
pub fn minutes_of(time: NaiveTime) -> u32 {
    time.hour() * MINUTES_PER_HOUR + time.minute()
}

// ── Period ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ClockTime ────────────────────────────────────────────────────────────────

/// A 12-hour wall time: `hour` ∈ 1..=12, `minute` ∈ 0..=59.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    period: Period,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, period: Period) -> CoreResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(CoreError::InvalidInput(format!("hour {hour} outside 1..=12")));
        }
        if minute > 59 {
            return Err(CoreError::InvalidInput(format!("minute {minute} outside 0..=59")));
        }
        Ok(Self { hour, minute, period })
    }

    /// Constructor for compile-time constants whose ranges are known good.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, period: Period) -> Self {
        Self { hour, minute, period }
    }

    /// Parse the fixed `"H:MM AM"` / `"HH:MM PM"` format.
    ///
    /// Leading and trailing whitespace is ignored; anything else that
    /// deviates (missing period, one-digit minutes, lowercase period, extra
    /// tokens) is a [`CoreError::Parse`].
    pub fn parse(s: &str) -> CoreResult<Self> {
        let bad = || CoreError::Parse(format!("{s:?} is not a \"H:MM AM/PM\" time"));

        let (clock, period) = s.trim().split_once(' ').ok_or_else(bad)?;
        let period = match period {
            "AM" => Period::Am,
            "PM" => Period::Pm,
            _ => return Err(bad()),
        };

        let (h, m) = clock.split_once(':').ok_or_else(bad)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(bad());
        }
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let hour: u8 = h.parse().map_err(|_| bad())?;
        let minute: u8 = m.parse().map_err(|_| bad())?;

        Self::new(hour, minute, period).map_err(|e| CoreError::Parse(format!("{s:?}: {e}")))
    }

    /// Convert a 24-hour `chrono` time to its 12-hour form.
    pub fn from_naive(time: NaiveTime) -> Self {
        let (pm, hour) = time.hour12();
        Self {
            hour: hour as u8,
            minute: time.minute() as u8,
            period: if pm { Period::Pm } else { Period::Am },
        }
    }

    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn period(self) -> Period {
        self.period
    }

    /// Minutes since midnight.
    ///
    /// PM with hour ≠ 12 adds 720; AM with hour = 12 yields the minute
    /// component alone.  12 PM therefore maps to 720 + minute.
    pub fn minutes_since_midnight(self) -> u32 {
        let hour = self.hour as u32;
        let minute = self.minute as u32;
        match (self.period, hour) {
            (Period::Am, 12) => minute,
            (Period::Pm, h) if h != 12 => h * MINUTES_PER_HOUR + minute + 12 * MINUTES_PER_HOUR,
            (_, h) => h * MINUTES_PER_HOUR + minute,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.period)
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CoreError;
    fn try_from(s: String) -> CoreResult<Self> {
        Self::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> String {
        t.to_string()
    }
}

// ── Weekday ──────────────────────────────────────────────────────────────────

/// Day of the week, Sunday first (the order timetables are keyed in).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday    => "Sunday",
            Weekday::Monday    => "Monday",
            Weekday::Tuesday   => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday  => "Thursday",
            Weekday::Friday    => "Friday",
            Weekday::Saturday  => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;

    /// Full English day name, case-insensitive.
    fn from_str(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::Parse(format!("unknown weekday {s:?}")))
    }
}

// ── WindowPolicy ─────────────────────────────────────────────────────────────

/// How long a timetable slot counts as "current" after it starts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowPolicy {
    /// `[start, start + 60]` regardless of the declared end time.
    #[default]
    FixedHour,
    /// `[start, end]` using the end time written in the entry.
    DeclaredEnd,
}
