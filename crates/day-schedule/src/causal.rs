//! `CausalTrigger` — one-shot producer → consumer hand-off.
//!
//! A consumer activity (e.g. hanging washed clothes) is never due on its
//! own.  Its producer (the laundry run) arms it on completion with a future
//! timestamp; from that instant on the consumer is due.  Finalizing the
//! consumer disarms the trigger until the producer fires again.

use day_core::SimTime;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CausalTrigger {
    armed_at: Option<SimTime>,
}

impl CausalTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the trigger: due from `at` onwards.
    ///
    /// Re-arming while already armed replaces the timestamp.
    pub fn arm(&mut self, at: SimTime) {
        self.armed_at = Some(at);
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    pub fn armed_at(&self) -> Option<SimTime> {
        self.armed_at
    }

    #[inline]
    pub fn is_due(&self, now: SimTime) -> bool {
        self.armed_at.is_some_and(|at| now >= at)
    }
}
