//! `DailyTrigger` — wall-clock schedule for recurring daily activities.
//!
//! # Day model
//!
//! A daily activity is due at a fixed `TimeOfDay`.  At construction the first
//! due time is that time of day on the simulation's start date, or on the
//! following day when `skip_today` is set:
//!
//! ```text
//! next_due = start.day_start() + at          (+ 1 day if skip_today)
//! ```
//!
//! A start time past `at` leaves `next_due` in the past, so the activity is
//! due on the very first tick (it is late, not skipped).  Each completion
//! moves `next_due` forward by exactly one day regardless of how long the
//! activity ran or how late it started.

use day_core::{DAY, SimTime, TimeOfDay};

/// Ready when `now ≥ next_due`; advanced by one day per completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyTrigger {
    at:       TimeOfDay,
    next_due: SimTime,
}

impl DailyTrigger {
    pub fn new(start: SimTime, at: TimeOfDay, skip_today: bool) -> Self {
        let mut next_due = start.at(at);
        if skip_today {
            next_due += DAY;
        }
        Self { at, next_due }
    }

    /// The scheduled time of day.
    pub fn time_of_day(&self) -> TimeOfDay {
        self.at
    }

    /// The next timestamp at which the activity becomes due.
    pub fn next_due(&self) -> SimTime {
        self.next_due
    }

    #[inline]
    pub fn is_due(&self, now: SimTime) -> bool {
        now >= self.next_due
    }

    /// Move to the next day's occurrence.
    pub fn advance(&mut self) {
        self.next_due += DAY;
    }
}
