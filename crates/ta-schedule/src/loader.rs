//! CSV timetable loader.
//!
//! # CSV format
//!
//! One row per class slot.  Rows for the same weekday are kept in file
//! order, which must be chronological.
//!
//! ```csv
//! weekday,id,time,class,subject,room
//! Monday,1,9:00 AM - 10:00 AM,10th Grade A,Mathematics,Room 101
//! Monday,2,10:15 AM - 11:15 AM,9th Grade B,Physics,Room 205
//! Saturday,22,9:00 AM - 11:00 AM,All Grades,Math Club,Library
//! ```
//!
//! A row with an unknown weekday or a malformed `time` cell is skipped and
//! reported in [`LoadReport::skipped`]; the rest of the week still loads.
//! Structural CSV problems (wrong column count, bad quoting) abort the load
//! with [`ScheduleError::Csv`]; unreadable or non-UTF-8 input aborts with
//! [`ScheduleError::Io`].

use std::io::Read;
use std::path::Path;

use csv::{Position, StringRecord};
use serde::Deserialize;

use ta_core::{CoreError, Weekday};

use crate::{ScheduleEntry, ScheduleError, WeekTimetable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimetableRecord {
    weekday: String,
    id:      String,
    time:    String,
    class:   String,
    subject: String,
    room:    String,
}

// ── Report ────────────────────────────────────────────────────────────────────

/// A row that was dropped from scheduling because one of its cells failed
/// to parse.
#[derive(Debug)]
pub struct RowError {
    /// 1-based line number in the source, counting the header as line 1.
    pub line: u64,
    pub error: CoreError,
}

/// Result of a tolerant load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub week: WeekTimetable,
    pub skipped: Vec<RowError>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a weekly timetable from a CSV file.
pub fn load_week_csv(path: &Path) -> Result<LoadReport, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_week_reader(file)
}

/// Like [`load_week_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a timetable in
/// the binary.
pub fn load_week_reader<R: Read>(mut reader: R) -> Result<LoadReport, ScheduleError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let headers = csv_reader.headers()?.clone();
    let mut report = LoadReport::default();
    let mut record = StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |pos| source_line(&text, pos));
        let row: TimetableRecord = record.deserialize(Some(&headers))?;

        match parse_row(row) {
            Ok((day, entry)) => report.week.push(day, entry),
            Err(error) => {
                tracing::warn!(line, %error, "skipping timetable row");
                report.skipped.push(RowError { line, error });
            }
        }
    }

    Ok(report)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Line on which the record at `pos` starts.  The reader stamps a record
/// before it skips empty lines, so step over those here.
fn source_line(text: &str, pos: &Position) -> u64 {
    let rest = text.as_bytes().get(pos.byte() as usize..).unwrap_or_default();
    let blank = rest
        .iter()
        .take_while(|&&b| b == b'\n' || b == b'\r')
        .filter(|&&b| b == b'\n')
        .count();
    pos.line() + blank as u64
}

fn parse_row(row: TimetableRecord) -> Result<(Weekday, ScheduleEntry), CoreError> {
    let day: Weekday = row.weekday.parse()?;
    let entry = ScheduleEntry::parse(row.id, &row.time, row.class, row.subject, row.room)?;
    Ok((day, entry))
}
