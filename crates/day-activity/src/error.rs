use day_core::CoreError;
use day_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("activity configuration error: {0}")]
    Config(String),

    #[error("routine row {row}: unknown activity kind {kind:?}")]
    UnknownKind { row: usize, kind: String },

    #[error("routine row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("routine row {row}: follow-on {name:?} is not an activity in this routine")]
    UnknownFollowOn { row: usize, name: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type ActivityResult<T> = Result<T, ActivityError>;
