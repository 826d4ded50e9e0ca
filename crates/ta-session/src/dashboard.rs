//! Dashboard aggregation: one read-only snapshot of everything the landing
//! screen shows.

use ta_schedule::{DayTimetable, Progress, Resolver, ScheduleEntry};

use crate::{Session, Teacher};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttendanceStatus {
    Marked,
    NotMarked,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Marked    => "Marked",
            AttendanceStatus::NotMarked => "Not Marked",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LocationStatus {
    Verified,
    NotVerified,
}

impl LocationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationStatus::Verified    => "Verified",
            LocationStatus::NotVerified => "Not Verified",
        }
    }
}

/// Snapshot for one instant.  Borrowed from the session and today's
/// timetable; rebuild it on every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard<'a> {
    pub teacher: Option<&'a Teacher>,
    pub attendance: AttendanceStatus,
    pub location: LocationStatus,
    pub classes_today: usize,
    pub current: Option<&'a ScheduleEntry>,
    pub next: Option<&'a ScheduleEntry>,
    pub progress: Progress,
}

impl<'a> Dashboard<'a> {
    pub fn build(
        session: &'a Session,
        today: &'a DayTimetable,
        resolver: Resolver,
        now_minutes: u32,
    ) -> Self {
        let entries = today.entries();
        Self {
            teacher: session.teacher(),
            attendance: if session.attendance_marked() {
                AttendanceStatus::Marked
            } else {
                AttendanceStatus::NotMarked
            },
            location: if session.radius_verified() {
                LocationStatus::Verified
            } else {
                LocationStatus::NotVerified
            },
            classes_today: entries.len(),
            current: resolver.current_entry(entries, now_minutes),
            next: resolver.next_entry(entries, now_minutes),
            progress: resolver.progress(entries, now_minutes),
        }
    }

    /// `"{n} Scheduled"`.
    pub fn classes_label(&self) -> String {
        format!("{} Scheduled", self.classes_today)
    }

    /// Text for the "current class" card when nothing is live.  `None` while
    /// a class is in progress.
    pub fn idle_message(&self) -> Option<&'static str> {
        match (self.current, self.next) {
            (Some(_), _) => None,
            (None, Some(_)) => Some("Next class starts soon"),
            (None, None) => Some("No more classes today"),
        }
    }
}
