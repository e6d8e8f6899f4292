//! `DailyReporter` — per-day statistics with a calendar-day roll-over.

use std::time::Duration;

use day_core::SimTime;
use day_sim::Reporter;

use crate::DailySummary;

/// Accumulates free time, feedings and interventions for the current day.
///
/// Call [`roll_over`][Self::roll_over] once per tick (the
/// [`SummaryObserver`][crate::SummaryObserver] does this); on the last tick
/// of a calendar day it returns the day's summary and starts a fresh one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DailyReporter {
    free_time:     Duration,
    feedings:      u32,
    interventions: u32,
}

impl DailyReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn free_time(&self) -> Duration {
        self.free_time
    }

    pub fn feedings(&self) -> u32 {
        self.feedings
    }

    pub fn interventions(&self) -> u32 {
        self.interventions
    }

    /// If the tick `[now, now + step)` ends on a different calendar day than
    /// it starts, return the summary of `now`'s day and reset.
    pub fn roll_over(&mut self, now: SimTime, step: Duration) -> Option<DailySummary> {
        let date = now.date();
        if date == (now + step).date() {
            return None;
        }
        let summary = DailySummary {
            date,
            feedings:      self.feedings,
            interventions: self.interventions,
            free_time:     self.free_time,
        };
        *self = Self::default();
        Some(summary)
    }
}

impl Reporter for DailyReporter {
    fn notify_idle(&mut self, step: Duration) {
        self.free_time += step;
    }

    fn notify_satisfaction(&mut self) {
        self.feedings += 1;
    }

    fn notify_preemption(&mut self) {
        self.interventions += 1;
    }
}
