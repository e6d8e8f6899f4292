//! `Reporter` — sink for scheduling statistics.

use std::time::Duration;

/// Receives the three statistics the scheduler produces.
///
/// Calls are synchronous and must not block.  The reporter is owned by the
/// scheduler and passed in at construction; there is no global instance.
pub trait Reporter {
    /// Nothing was queued for one step of length `step`.
    fn notify_idle(&mut self, step: Duration);

    /// A tracked need was satisfied (one feeding).
    fn notify_satisfaction(&mut self);

    /// A running activity was preempted by a different one.
    fn notify_preemption(&mut self);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn notify_idle(&mut self, step: Duration) {
        (**self).notify_idle(step);
    }

    fn notify_satisfaction(&mut self) {
        (**self).notify_satisfaction();
    }

    fn notify_preemption(&mut self) {
        (**self).notify_preemption();
    }
}

/// A reporter that ignores everything.
pub struct NoopReporter;

impl Reporter for NoopReporter {
    #[inline]
    fn notify_idle(&mut self, _step: Duration) {}

    #[inline]
    fn notify_satisfaction(&mut self) {}

    #[inline]
    fn notify_preemption(&mut self) {}
}

/// Running totals over the whole run, never reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TallyReporter {
    pub idle:          Duration,
    pub satisfactions: u64,
    pub preemptions:   u64,
}

impl Reporter for TallyReporter {
    fn notify_idle(&mut self, step: Duration) {
        self.idle += step;
    }

    fn notify_satisfaction(&mut self) {
        self.satisfactions += 1;
    }

    fn notify_preemption(&mut self) {
        self.preemptions += 1;
    }
}
