//! `ta-schedule` — timetable entries, current/next class resolution, and CSV
//! loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`entry`]     | `TimeRange`, `ScheduleEntry`                              |
//! | [`resolver`]  | `Resolver`, `SlotStatus`, `Progress`, `current_entry`, `next_entry` |
//! | [`timetable`] | `DayTimetable`, `WeekTimetable`, `TimetableCache`         |
//! | [`loader`]    | `load_week_csv`, `load_week_reader`, `LoadReport`         |
//! | [`builtin`]   | `sample_week`                                             |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Resolution model (summary)
//!
//! All queries take the current time as minutes since local midnight:
//!
//! ```text
//! window(e)  = [start(e), start(e) + 60]     (FixedHour, default)
//!            = [start(e), end(e)]            (DeclaredEnd)
//! current    = first e with now ∈ window(e)
//! next       = first e with start(e) > now
//! ```

pub mod builtin;
pub mod entry;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod timetable;

#[cfg(test)]
mod tests;

pub use builtin::sample_week;
pub use entry::{ScheduleEntry, TimeRange};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{LoadReport, RowError, load_week_csv, load_week_reader};
pub use resolver::{
    Progress, Resolver, SlotStatus, current_entry, next_entry, slot_index, slot_statuses,
};
pub use ta_core::WindowPolicy;
pub use timetable::{DayTimetable, TimetableCache, WeekTimetable};
