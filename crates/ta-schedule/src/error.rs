use thiserror::Error;

use ta_core::CoreError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("timetable CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
