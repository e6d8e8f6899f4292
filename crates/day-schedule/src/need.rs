//! `NeedModel` — stochastic recurring need (e.g. a baby getting hungry).
//!
//! The model remembers when the need was last satisfied and draws, from a
//! normal distribution, how long it takes to recur:
//!
//! ```text
//! interval ~ max(0, Normal(mean, std_dev))   minutes
//! due      ⇔ now − last_satisfied ≥ interval
//! ```
//!
//! A new interval is drawn at construction and on every `satisfy`.
//!
//! # Negative draws
//!
//! With the default parameters (180 ± 30 min) a negative draw is a six-sigma
//! event, but nothing in the distribution forbids it.  Negative (and
//! non-finite) draws are clamped to zero: the need is due again immediately.

use std::time::Duration;

use day_core::{SimRng, SimTime};
use rand_distr::Normal;

use crate::{ScheduleError, ScheduleResult};

/// Distribution parameters of a [`NeedModel`], in minutes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeedParams {
    pub mean_minutes:    f64,
    pub std_dev_minutes: f64,
}

impl Default for NeedParams {
    /// Feeding every three hours, give or take half an hour.
    fn default() -> Self {
        Self { mean_minutes: 180.0, std_dev_minutes: 30.0 }
    }
}

impl NeedParams {
    fn distribution(self) -> ScheduleResult<Normal<f64>> {
        let invalid = |reason: &str| ScheduleError::NeedDistribution {
            mean:    self.mean_minutes,
            std_dev: self.std_dev_minutes,
            reason:  reason.to_owned(),
        };
        if !self.mean_minutes.is_finite() {
            return Err(invalid("mean must be finite"));
        }
        if !self.std_dev_minutes.is_finite() || self.std_dev_minutes < 0.0 {
            return Err(invalid("standard deviation must be finite and non-negative"));
        }
        Normal::new(self.mean_minutes, self.std_dev_minutes).map_err(|e| invalid(&e.to_string()))
    }
}

/// Stochastic condition trigger.
#[derive(Debug)]
pub struct NeedModel {
    dist:           Normal<f64>,
    rng:            SimRng,
    last_satisfied: SimTime,
    interval:       Duration,
}

impl NeedModel {
    /// Create a model whose need was last satisfied at `now`.
    ///
    /// Draws the first interval immediately.
    pub fn new(now: SimTime, params: NeedParams, rng: SimRng) -> ScheduleResult<Self> {
        let mut model = Self {
            dist: params.distribution()?,
            rng,
            last_satisfied: now,
            interval: Duration::ZERO,
        };
        model.satisfy(now);
        Ok(model)
    }

    /// Record that the need was satisfied at `at` and draw the next interval.
    pub fn satisfy(&mut self, at: SimTime) {
        self.last_satisfied = at;
        let drawn: f64 = self.rng.sample(&self.dist);
        self.interval = clamped_minutes(drawn);
    }

    pub fn last_satisfied(&self) -> SimTime {
        self.last_satisfied
    }

    /// The currently drawn interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_due(&self, now: SimTime) -> bool {
        now.since(self.last_satisfied) >= self.interval
    }
}

/// Minutes → `Duration`, flooring negative and non-finite draws at zero.
pub(crate) fn clamped_minutes(minutes: f64) -> Duration {
    if !minutes.is_finite() || minutes <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(minutes * 60.0).unwrap_or(Duration::MAX)
}
