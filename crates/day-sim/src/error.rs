use day_activity::ActivityError;
use day_core::ActivityId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{activity}: follow-on activity {target} does not exist")]
    UnknownFollowOn {
        activity: String,
        target:   ActivityId,
    },

    #[error("{activity}: follow-on activity {target:?} has no causal trigger")]
    NotCausal {
        activity: String,
        target:   String,
    },

    #[error("{count} activities exceed the ActivityId range")]
    TooManyActivities { count: usize },

    #[error(transparent)]
    Activity(#[from] ActivityError),
}

pub type SimResult<T> = Result<T, SimError>;
