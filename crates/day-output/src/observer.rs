//! `SummaryObserver<W>` — bridges `SimObserver` to a `SummaryWriter`.

use std::time::Duration;

use tracing::{info, warn};

use day_core::SimTime;
use day_sim::{SimObserver, TickOutcome};

use crate::writer::SummaryWriter;
use crate::{DailyReporter, DailySummary, OutputError, OutputResult};

/// A [`SimObserver`] that rolls the [`DailyReporter`] over at the end of
/// every calendar day and hands the finished summary to any
/// [`SummaryWriter`] backend (console, CSV, both).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SummaryObserver<W: SummaryWriter> {
    writer:     W,
    days:       Vec<DailySummary>,
    last_error: Option<OutputError>,
}

impl<W: SummaryWriter> SummaryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, days: Vec::new(), last_error: None }
    }

    /// Every summary produced so far, oldest first.
    pub fn summaries(&self) -> &[DailySummary] {
        &self.days
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "summary write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SummaryWriter> SimObserver<DailyReporter> for SummaryObserver<W> {
    fn on_tick_end(
        &mut self,
        now:      SimTime,
        step:     Duration,
        _outcome: &TickOutcome,
        reporter: &mut DailyReporter,
    ) {
        let Some(summary) = reporter.roll_over(now, step) else {
            return;
        };
        info!(
            date = %summary.date,
            feedings = summary.feedings,
            interventions = summary.interventions,
            free_minutes = summary.free_time.as_secs() / 60,
            "day finished"
        );
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
        self.days.push(summary);
    }

    fn on_sim_end(&mut self, _end: SimTime) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
