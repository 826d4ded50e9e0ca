use thiserror::Error;

use ta_core::CoreError;

use crate::LocationFailure;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("no teacher is logged in")]
    Unauthenticated,

    /// The remote attendance service could not be reached or refused the
    /// request.
    #[error("attendance API error: {0}")]
    Api(String),

    #[error("location unavailable: {0}")]
    Location(#[from] LocationFailure),

    #[error("session file is corrupt: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
