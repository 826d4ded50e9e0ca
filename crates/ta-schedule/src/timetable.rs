//! Per-day and per-week timetables, plus the day-boundary cache.

use std::collections::BTreeMap;

use ta_core::Weekday;

use crate::ScheduleEntry;

// ── DayTimetable ──────────────────────────────────────────────────────────────

/// The ordered class list for one weekday.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayTimetable {
    entries: Vec<ScheduleEntry>,
}

impl DayTimetable {
    /// Wrap `entries` as given.  Order is preserved, not sorted.
    pub fn new(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }
}

// ── WeekTimetable ─────────────────────────────────────────────────────────────

/// Static configuration table: weekday → day timetable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekTimetable {
    days: BTreeMap<Weekday, DayTimetable>,
}

impl WeekTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the timetable for `day`.
    pub fn insert(&mut self, day: Weekday, timetable: DayTimetable) {
        self.days.insert(day, timetable);
    }

    /// Append one entry to `day`, creating the day if needed.
    pub fn push(&mut self, day: Weekday, entry: ScheduleEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// The timetable for `day`; an empty day when nothing is configured.
    pub fn for_day(&self, day: Weekday) -> DayTimetable {
        self.days.get(&day).cloned().unwrap_or_default()
    }

    /// Total number of entries across the week.
    pub fn entry_count(&self) -> usize {
        self.days.values().map(DayTimetable::len).sum()
    }
}

// ── TimetableCache ────────────────────────────────────────────────────────────

/// Holds the current weekday's timetable and rebuilds it only when the
/// weekday changes.
#[derive(Clone, Debug)]
pub struct TimetableCache {
    week: WeekTimetable,
    current: Option<(Weekday, DayTimetable)>,
}

impl TimetableCache {
    pub fn new(week: WeekTimetable) -> Self {
        Self { week, current: None }
    }

    /// Today's timetable, rebuilding on the first call and after each day
    /// boundary.
    pub fn today(&mut self, day: Weekday) -> &DayTimetable {
        if self.cached_day() != Some(day) {
            self.current = None;
        }
        let week = &self.week;
        let (_, timetable) = self.current.get_or_insert_with(|| {
            let timetable = week.for_day(day);
            tracing::debug!(%day, entries = timetable.len(), "timetable rebuilt for new day");
            (day, timetable)
        });
        timetable
    }

    /// The weekday the cache was last built for.
    pub fn cached_day(&self) -> Option<Weekday> {
        self.current.as_ref().map(|(d, _)| *d)
    }

    pub fn week(&self) -> &WeekTimetable {
        &self.week
    }
}
