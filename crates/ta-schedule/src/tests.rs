//! Unit tests for ta-schedule.

use ta_core::Weekday;

use crate::{ScheduleEntry, WeekTimetable, sample_week};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn entry(id: &str, time: &str) -> ScheduleEntry {
    ScheduleEntry::parse(id, time, "10th Grade A", "Mathematics", "Room 101").unwrap()
}

/// Two morning classes with a 15-minute gap between them.
fn morning() -> Vec<ScheduleEntry> {
    vec![
        entry("1", "9:00 AM - 10:00 AM"),
        entry("2", "10:15 AM - 11:15 AM"),
    ]
}

fn week() -> WeekTimetable {
    sample_week().unwrap()
}

fn ids(entries: Option<&ScheduleEntry>) -> Option<&str> {
    entries.map(|e| e.id.as_str())
}

// ── TimeRange / ScheduleEntry ─────────────────────────────────────────────────

#[cfg(test)]
mod entry {
    use ta_core::{CoreError, WindowPolicy};

    use crate::TimeRange;

    #[test]
    fn parse_and_display() {
        let r = TimeRange::parse("11:30 AM - 12:30 PM").unwrap();
        assert_eq!(r.start_minutes(), 690);
        assert_eq!(r.end_minutes(), 750);
        assert_eq!(r.to_string(), "11:30 AM - 12:30 PM");
    }

    #[test]
    fn window_policies() {
        let r = TimeRange::parse("9:00 AM - 11:00 AM").unwrap();
        assert_eq!(r.window(WindowPolicy::FixedHour), (540, 600));
        assert_eq!(r.window(WindowPolicy::DeclaredEnd), (540, 660));
    }

    #[test]
    fn reversed_declared_end_is_empty() {
        let r = TimeRange::parse("11:00 PM - 1:00 AM").unwrap();
        assert!(!r.contains(1_380, WindowPolicy::DeclaredEnd));
        assert!(r.contains(1_380, WindowPolicy::FixedHour));
    }

    #[test]
    fn midnight_hour_start() {
        let r = TimeRange::parse("12:30 AM - 1:30 AM").unwrap();
        assert_eq!(r.start_minutes(), 30);
    }

    #[test]
    fn malformed_ranges() {
        for s in ["9:00 AM", "9:00 AM-10:00 AM", "9:00 - 10:00", "9:00 AM - ten"] {
            assert!(matches!(TimeRange::parse(s), Err(CoreError::Parse(_))), "{s:?}");
        }
    }

    #[test]
    fn entry_parse_rejects_bad_time() {
        let e = crate::ScheduleEntry::parse("x", "soon", "c", "s", "r");
        assert!(e.is_err());
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use proptest::prelude::*;
    use ta_core::WindowPolicy;

    use crate::{
        Progress, Resolver, SlotStatus, current_entry, next_entry, slot_index, slot_statuses,
    };

    use super::*;

    #[test]
    fn current_mid_window() {
        assert_eq!(ids(current_entry(&morning(), 570)), Some("1"));
    }

    #[test]
    fn current_before_first() {
        assert!(current_entry(&morning(), 480).is_none());
    }

    #[test]
    fn current_at_exact_start_is_inclusive() {
        assert_eq!(ids(current_entry(&morning(), 615)), Some("2"));
    }

    #[test]
    fn current_at_window_end_is_inclusive() {
        assert_eq!(ids(current_entry(&morning(), 600)), Some("1"));
        assert!(current_entry(&morning(), 601).is_none());
    }

    #[test]
    fn overlapping_windows_first_match_wins() {
        let entries = vec![
            entry("a", "9:00 AM - 10:00 AM"),
            entry("b", "9:30 AM - 10:30 AM"),
        ];
        assert_eq!(ids(current_entry(&entries, 580)), Some("a"));
        assert_eq!(ids(current_entry(&entries, 610)), Some("b"));
    }

    #[test]
    fn back_to_back_shared_minute_goes_to_earlier() {
        let entries = vec![
            entry("a", "9:00 AM - 10:00 AM"),
            entry("b", "10:00 AM - 11:00 AM"),
        ];
        assert_eq!(ids(current_entry(&entries, 600)), Some("a"));
    }

    #[test]
    fn fixed_hour_ignores_declared_end() {
        let sat = week().for_day(Weekday::Saturday);
        // 10:50 AM during the two-hour Math Club.
        assert!(current_entry(sat.entries(), 650).is_none());
        let declared = Resolver::new(WindowPolicy::DeclaredEnd);
        assert_eq!(ids(declared.current_entry(sat.entries(), 650)), Some("22"));
    }

    #[test]
    fn next_before_all_is_first() {
        assert_eq!(ids(next_entry(&morning(), 0)), Some("1"));
        assert_eq!(ids(next_entry(&morning(), 539)), Some("1"));
    }

    #[test]
    fn next_is_strictly_after_now() {
        assert_eq!(ids(next_entry(&morning(), 540)), Some("2"));
        assert!(next_entry(&morning(), 615).is_none());
    }

    #[test]
    fn next_after_all_is_none() {
        assert!(next_entry(&morning(), 1_000).is_none());
    }

    #[test]
    fn empty_day() {
        let sunday = week().for_day(Weekday::Sunday);
        assert!(current_entry(sunday.entries(), 600).is_none());
        assert!(next_entry(sunday.entries(), 600).is_none());
        assert!(slot_statuses(sunday.entries(), 600).is_empty());
    }

    #[test]
    fn statuses_around_active_slot() {
        let monday = week().for_day(Weekday::Monday);
        // 11:40 AM → third class is live.
        assert_eq!(slot_index(monday.entries(), 700), Some(2));
        assert_eq!(
            slot_statuses(monday.entries(), 700),
            vec![
                SlotStatus::Completed,
                SlotStatus::Completed,
                SlotStatus::Current,
                SlotStatus::Upcoming,
                SlotStatus::Upcoming,
            ]
        );
        let progress = Resolver::default().progress(monday.entries(), 700);
        assert_eq!(progress, Progress::Active { index: 2, total: 5 });
        assert_eq!(progress.to_string(), "3 of 5 completed");
    }

    #[test]
    fn statuses_without_active_slot_are_upcoming() {
        let monday = week().for_day(Weekday::Monday);
        // 12:45 PM falls in the lunch gap.
        assert_eq!(slot_index(monday.entries(), 765), None);
        assert!(
            slot_statuses(monday.entries(), 765)
                .iter()
                .all(|s| *s == SlotStatus::Upcoming)
        );
        assert_eq!(Resolver::default().progress(monday.entries(), 765).to_string(), "All classes pending");
        assert_eq!(ids(next_entry(monday.entries(), 765)), Some("4"));
    }

    #[test]
    fn status_labels() {
        assert_eq!(SlotStatus::Completed.to_string(), "Completed");
        assert_eq!(SlotStatus::Current.as_str(), "Current");
        assert_eq!(SlotStatus::Upcoming.as_str(), "Upcoming");
    }

    proptest! {
        #[test]
        fn prop_queries_are_idempotent(now in 0u32..1_440) {
            let monday = week().for_day(Weekday::Monday);
            let e = monday.entries();
            prop_assert_eq!(current_entry(e, now), current_entry(e, now));
            prop_assert_eq!(next_entry(e, now), next_entry(e, now));
            prop_assert_eq!(slot_statuses(e, now), slot_statuses(e, now));
        }

        #[test]
        fn prop_current_matches_slot_index(now in 0u32..1_440) {
            let monday = week().for_day(Weekday::Monday);
            let e = monday.entries();
            let by_index = slot_index(e, now).map(|i| &e[i]);
            prop_assert_eq!(current_entry(e, now), by_index);
        }

        #[test]
        fn prop_next_starts_after_now(now in 0u32..1_440) {
            let monday = week().for_day(Weekday::Monday);
            if let Some(next) = next_entry(monday.entries(), now) {
                prop_assert!(next.start_minutes() > now);
            }
        }
    }
}

// ── Timetables ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timetable {
    use crate::{DayTimetable, ScheduleError, TimetableCache};

    use super::*;

    #[test]
    fn sample_week_shape() {
        let w = week();
        assert_eq!(w.entry_count(), 23);
        assert_eq!(w.for_day(Weekday::Monday).len(), 5);
        assert_eq!(w.for_day(Weekday::Saturday).len(), 2);
        assert!(w.for_day(Weekday::Sunday).is_empty());
    }

    #[test]
    fn builtin_rejects_bad_rows() {
        let csv = "\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM,A,Math,101\n\
Munday,2,10:15 AM - 11:15 AM,B,Physics,205\n\
";
        let err = crate::builtin::parse_strict(csv).unwrap_err();
        assert!(matches!(err, ScheduleError::Core(ta_core::CoreError::Parse(ref m)) if m.contains("line 3")));
    }

    #[test]
    fn sample_week_keeps_file_order() {
        let tue = week().for_day(Weekday::Tuesday);
        let got: Vec<&str> = tue.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(got, vec!["6", "7", "8", "9"]);
        assert_eq!(tue.entries()[2].subject, "Trigonometry");
        assert_eq!(tue.entries()[2].room, "Room 201");
    }

    #[test]
    fn day_does_not_sort() {
        let day = DayTimetable::new(vec![
            entry("late", "2:00 PM - 3:00 PM"),
            entry("early", "9:00 AM - 10:00 AM"),
        ]);
        assert_eq!(day.entries()[0].id.as_str(), "late");
    }

    #[test]
    fn insert_replaces_day() {
        let mut w = WeekTimetable::new();
        w.push(Weekday::Friday, entry("1", "9:00 AM - 10:00 AM"));
        w.insert(Weekday::Friday, DayTimetable::default());
        assert!(w.for_day(Weekday::Friday).is_empty());
    }

    #[test]
    fn cache_rebuilds_on_day_change_only() {
        let mut cache = TimetableCache::new(week());
        assert_eq!(cache.cached_day(), None);

        assert_eq!(cache.today(Weekday::Monday).len(), 5);
        assert_eq!(cache.cached_day(), Some(Weekday::Monday));
        assert_eq!(cache.today(Weekday::Monday).len(), 5);

        assert_eq!(cache.today(Weekday::Tuesday).len(), 4);
        assert_eq!(cache.cached_day(), Some(Weekday::Tuesday));
        assert!(cache.today(Weekday::Sunday).is_empty());
        assert_eq!(cache.week().entry_count(), 23);
    }
}

// ── CSV Loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use ta_core::CoreError;

    use crate::{ScheduleError, load_week_csv, load_week_reader};

    use super::*;

    const CSV: &[u8] = b"\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM,10th Grade A,Mathematics,Room 101\n\
Monday,2,10:15 AM - 11:15 AM,9th Grade B,Physics,Room 205\n\
friday, 3 ,1:30 PM - 2:30 PM,12th Grade B,Exam Prep,Room 302\n\
";

    #[test]
    fn loads_rows_by_weekday() {
        let report = load_week_reader(Cursor::new(CSV)).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(report.week.for_day(Weekday::Monday).len(), 2);
        let fri = report.week.for_day(Weekday::Friday);
        assert_eq!(fri.entries()[0].id.as_str(), "3");
        assert_eq!(fri.entries()[0].start_minutes(), 810);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let csv = b"\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM,A,Math,101\n\
Monday,2,9:00-10:00,B,Physics,205\n\
Caturday,3,11:30 AM - 12:30 PM,C,Art,103\n\
Monday,4,1:30 PM - 2:30 PM,D,Math,101\n\
";
        let report = load_week_reader(Cursor::new(csv.as_slice())).unwrap();
        let mon = report.week.for_day(Weekday::Monday);
        let got: Vec<&str> = mon.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(got, vec!["1", "4"]);

        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].line, 3);
        assert!(matches!(report.skipped[0].error, CoreError::Parse(_)));
        assert_eq!(report.skipped[1].line, 4);
    }

    #[test]
    fn skipped_line_counts_blank_lines() {
        let csv = b"\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM,A,Math,101\n\
\n\
Monday,2,9:00-10:00,B,Physics,205\n\
";
        let report = load_week_reader(Cursor::new(csv.as_slice())).unwrap();
        assert_eq!(report.week.entry_count(), 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 4);
    }

    #[test]
    fn skipped_line_counts_multiline_cells() {
        let csv = b"\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM,\"Grade A\nSection 2\",Math,101\n\
Monday,2,9:00-10:00,B,Physics,205\n\
";
        let report = load_week_reader(Cursor::new(csv.as_slice())).unwrap();
        let mon = report.week.for_day(Weekday::Monday);
        assert_eq!(mon.entries()[0].class, "Grade A\nSection 2");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line, 4);
    }

    #[test]
    fn structural_errors_abort() {
        let csv = b"\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM\n\
";
        let result = load_week_reader(Cursor::new(csv.as_slice()));
        assert!(matches!(result, Err(ScheduleError::Csv(_))));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV).unwrap();
        let report = load_week_csv(file.path()).unwrap();
        assert_eq!(report.week.entry_count(), 3);

        let missing = load_week_csv(std::path::Path::new("/no/such/timetable.csv"));
        assert!(matches!(missing, Err(ScheduleError::Io(_))));
    }
}
