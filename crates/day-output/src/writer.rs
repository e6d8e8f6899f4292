//! The `SummaryWriter` trait implemented by all summary backends.

use crate::{DailySummary, OutputResult};

/// Trait implemented by the console and CSV summary writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SummaryObserver::take_error`][crate::SummaryObserver::take_error].
pub trait SummaryWriter {
    /// Write one finished day.
    fn write_summary(&mut self, summary: &DailySummary) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: SummaryWriter + ?Sized> SummaryWriter for Box<W> {
    fn write_summary(&mut self, summary: &DailySummary) -> OutputResult<()> {
        (**self).write_summary(summary)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// `None` accepts and drops every summary.
impl<W: SummaryWriter> SummaryWriter for Option<W> {
    fn write_summary(&mut self, summary: &DailySummary) -> OutputResult<()> {
        match self {
            Some(w) => w.write_summary(summary),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}

/// Both writers receive every summary; the first error wins.
impl<A: SummaryWriter, B: SummaryWriter> SummaryWriter for (A, B) {
    fn write_summary(&mut self, summary: &DailySummary) -> OutputResult<()> {
        let first = self.0.write_summary(summary);
        let second = self.1.write_summary(summary);
        first.and(second)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}
