//! The built-in sample week, used when no timetable CSV is configured.

use std::io::Cursor;

use ta_core::CoreError;

use crate::{ScheduleResult, WeekTimetable, load_week_reader};

// Monday–Saturday; Sunday has no classes.
pub const SAMPLE_WEEK_CSV: &str = "\
weekday,id,time,class,subject,room\n\
Monday,1,9:00 AM - 10:00 AM,10th Grade A,Mathematics,Room 101\n\
Monday,2,10:15 AM - 11:15 AM,9th Grade B,Physics,Room 205\n\
Monday,3,11:30 AM - 12:30 PM,11th Grade C,Advanced Math,Room 103\n\
Monday,4,1:30 PM - 2:30 PM,10th Grade B,Mathematics,Room 101\n\
Monday,5,2:45 PM - 3:45 PM,12th Grade A,Calculus,Room 301\n\
Tuesday,6,9:00 AM - 10:00 AM,9th Grade A,Algebra,Room 102\n\
Tuesday,7,10:15 AM - 11:15 AM,10th Grade C,Geometry,Room 104\n\
Tuesday,8,11:30 AM - 12:30 PM,11th Grade A,Trigonometry,Room 201\n\
Tuesday,9,1:30 PM - 2:30 PM,12th Grade B,Statistics,Room 302\n\
Wednesday,10,9:00 AM - 10:00 AM,10th Grade A,Mathematics,Room 101\n\
Wednesday,11,10:15 AM - 11:15 AM,9th Grade C,Basic Math,Room 105\n\
Wednesday,12,11:30 AM - 12:30 PM,11th Grade B,Advanced Math,Room 202\n\
Wednesday,13,1:30 PM - 2:30 PM,12th Grade C,Applied Math,Room 303\n\
Thursday,14,9:00 AM - 10:00 AM,9th Grade B,Mathematics,Room 102\n\
Thursday,15,10:15 AM - 11:15 AM,10th Grade B,Geometry,Room 103\n\
Thursday,16,11:30 AM - 12:30 PM,11th Grade C,Calculus Prep,Room 203\n\
Thursday,17,1:30 PM - 2:30 PM,12th Grade A,Advanced Calculus,Room 301\n\
Friday,18,9:00 AM - 10:00 AM,10th Grade C,Mathematics,Room 104\n\
Friday,19,10:15 AM - 11:15 AM,9th Grade A,Problem Solving,Room 106\n\
Friday,20,11:30 AM - 12:30 PM,11th Grade A,Math Review,Room 201\n\
Friday,21,1:30 PM - 2:30 PM,12th Grade B,Exam Prep,Room 302\n\
Saturday,22,9:00 AM - 11:00 AM,All Grades,Math Club,Library\n\
Saturday,23,11:15 AM - 12:15 PM,Teachers,Staff Meeting,Conference Room\n\
";

/// Parse [`SAMPLE_WEEK_CSV`].
pub fn sample_week() -> ScheduleResult<WeekTimetable> {
    parse_strict(SAMPLE_WEEK_CSV)
}

/// Load `csv`, treating any skipped row as an error.
pub(crate) fn parse_strict(csv: &str) -> ScheduleResult<WeekTimetable> {
    let report = load_week_reader(Cursor::new(csv))?;
    match report.skipped.into_iter().next() {
        Some(row) => Err(CoreError::Parse(format!(
            "built-in timetable line {}: {}",
            row.line, row.error
        ))
        .into()),
        None => Ok(report.week),
    }
}
