//! Simulation observer trait for progress reporting and data collection.

use std::time::Duration;

use day_core::SimTime;

use crate::TickOutcome;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// `R` is the scheduler's reporter type.  All methods have default no-op
/// implementations so implementors only need to override what they care
/// about.
///
/// # Example: end-of-day flush
///
/// ```rust,ignore
/// struct DayPrinter;
///
/// impl SimObserver<DailyReporter> for DayPrinter {
///     fn on_tick_end(&mut self, now: SimTime, step: Duration, _: &TickOutcome, r: &mut DailyReporter) {
///         if let Some(summary) = r.roll_over(now, step) {
///             println!("{summary}");
///         }
///     }
/// }
/// ```
pub trait SimObserver<R> {
    /// Called at the very start of each tick, before the readiness sweep.
    fn on_tick_start(&mut self, _now: SimTime) {}

    /// Called at the end of each tick with what the scheduler did.
    ///
    /// `reporter` is the scheduler's own reporter, so per-day accumulators
    /// can be read and reset here.
    fn on_tick_end(
        &mut self,
        _now:      SimTime,
        _step:     Duration,
        _outcome:  &TickOutcome,
        _reporter: &mut R,
    ) {}

    /// Called once after the final tick completes.  `end` is the time just
    /// after the last tick.
    fn on_sim_end(&mut self, _end: SimTime) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl<R> SimObserver<R> for NoopObserver {}
