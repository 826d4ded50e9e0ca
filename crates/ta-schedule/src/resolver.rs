//! Current / next class resolution over an ordered slice of entries.
//!
//! # Model
//!
//! ```text
//! current  = first entry (sequence order) whose window contains now
//! next     = first entry (sequence order) whose start  >  now
//! status_i = Completed if i < current, Current if i == current, else Upcoming
//! ```
//!
//! Entries are never sorted here: the slice order is taken to be the
//! chronological order of the day.  Every query is recomputed from scratch
//! from the caller-supplied minute, so there is no stored per-entry state and
//! no transition can be missed, only observed late if `now` is stale.

use std::fmt;

use ta_core::WindowPolicy;

use crate::ScheduleEntry;

// ── SlotStatus ────────────────────────────────────────────────────────────────

/// Display status of one timetable slot relative to "now".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotStatus {
    Completed,
    Current,
    Upcoming,
}

impl SlotStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotStatus::Completed => "Completed",
            SlotStatus::Current   => "Current",
            SlotStatus::Upcoming  => "Upcoming",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Day summary line shown under a timetable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Slot `index` (0-based) of `total` is active.
    Active { index: usize, total: usize },
    /// No slot is active right now.
    Pending,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Active { index, total } => write!(f, "{} of {} completed", index + 1, total),
            Progress::Pending => f.write_str("All classes pending"),
        }
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

/// Stateless resolver parameterised by the active-window policy.
///
/// `Resolver::default()` uses [`WindowPolicy::FixedHour`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolver {
    pub policy: WindowPolicy,
}

impl Resolver {
    pub fn new(policy: WindowPolicy) -> Self {
        Self { policy }
    }

    /// Position of the first entry whose window contains `now_minutes`.
    pub fn slot_index(&self, entries: &[ScheduleEntry], now_minutes: u32) -> Option<usize> {
        entries
            .iter()
            .position(|e| e.time.contains(now_minutes, self.policy))
    }

    /// The first entry whose window contains `now_minutes`.
    pub fn current_entry<'a>(
        &self,
        entries: &'a [ScheduleEntry],
        now_minutes: u32,
    ) -> Option<&'a ScheduleEntry> {
        self.slot_index(entries, now_minutes).map(|i| &entries[i])
    }

    /// The first entry that starts strictly after `now_minutes`.
    ///
    /// Independent of [`Resolver::current_entry`]; the window policy plays
    /// no part here.
    pub fn next_entry<'a>(
        &self,
        entries: &'a [ScheduleEntry],
        now_minutes: u32,
    ) -> Option<&'a ScheduleEntry> {
        entries.iter().find(|e| e.start_minutes() > now_minutes)
    }

    /// One status per entry, in slice order.  With no active slot every
    /// entry reads as upcoming.
    pub fn slot_statuses(&self, entries: &[ScheduleEntry], now_minutes: u32) -> Vec<SlotStatus> {
        let active = self.slot_index(entries, now_minutes);
        (0..entries.len())
            .map(|i| match active {
                Some(a) if i < a => SlotStatus::Completed,
                Some(a) if i == a => SlotStatus::Current,
                _ => SlotStatus::Upcoming,
            })
            .collect()
    }

    pub fn progress(&self, entries: &[ScheduleEntry], now_minutes: u32) -> Progress {
        match self.slot_index(entries, now_minutes) {
            Some(index) => Progress::Active { index, total: entries.len() },
            None => Progress::Pending,
        }
    }
}

// ── Free functions (fixed one-hour windows) ───────────────────────────────────

#[inline]
pub fn current_entry(entries: &[ScheduleEntry], now_minutes: u32) -> Option<&ScheduleEntry> {
    Resolver::default().current_entry(entries, now_minutes)
}

#[inline]
pub fn next_entry(entries: &[ScheduleEntry], now_minutes: u32) -> Option<&ScheduleEntry> {
    Resolver::default().next_entry(entries, now_minutes)
}

#[inline]
pub fn slot_index(entries: &[ScheduleEntry], now_minutes: u32) -> Option<usize> {
    Resolver::default().slot_index(entries, now_minutes)
}

#[inline]
pub fn slot_statuses(entries: &[ScheduleEntry], now_minutes: u32) -> Vec<SlotStatus> {
    Resolver::default().slot_statuses(entries, now_minutes)
}
