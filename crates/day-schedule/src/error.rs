use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid need distribution (mean {mean} min, std dev {std_dev} min): {reason}")]
    NeedDistribution {
        mean:    f64,
        std_dev: f64,
        reason:  String,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
