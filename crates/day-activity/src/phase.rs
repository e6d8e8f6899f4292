//! `PhasePlan` — the named phases an activity runs through.
//!
//! # Boundaries
//!
//! A plan with phase durations `d0, d1, …, dn-1` has cumulative boundaries
//!
//! ```text
//! b0 = d0,  b1 = d0 + d1,  …,  bn-1 = total
//! ```
//!
//! The internal boundaries `b0 … bn-2` mark phase changes; `bn-1` marks
//! completion.  Progress moves in steps that need not divide the phase
//! durations, so a boundary `b` counts as reached on the step whose progress
//! goes from `before` to `after` with `before < b ≤ after`.  A single large
//! step may cross several boundaries; each is reported in order.

use std::time::Duration;

/// Ordered, non-empty list of phase durations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhasePlan {
    durations:  Vec<Duration>,
    boundaries: Vec<Duration>,
}

impl PhasePlan {
    /// Build a plan from phase durations.
    ///
    /// Returns `None` if `durations` is empty or any phase is zero-length.
    pub fn new(durations: Vec<Duration>) -> Option<Self> {
        if durations.is_empty() || durations.iter().any(Duration::is_zero) {
            return None;
        }
        let boundaries = durations
            .iter()
            .scan(Duration::ZERO, |acc, &d| {
                *acc = acc.saturating_add(d);
                Some(*acc)
            })
            .collect();
        Some(Self { durations, boundaries })
    }

    /// Build a plan from whole-minute phase lengths.
    pub fn from_minutes(minutes: &[u64]) -> Option<Self> {
        Self::new(minutes.iter().map(|&m| day_core::minutes(m)).collect())
    }

    /// Sum of all phase durations.
    #[inline]
    pub fn total(&self) -> Duration {
        // Non-empty by construction.
        self.boundaries.last().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Duration of phase `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    pub fn duration(&self, index: usize) -> Duration {
        self.durations[index]
    }

    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    /// Cumulative phase-end offsets; the last one equals [`total`][Self::total].
    pub fn boundaries(&self) -> &[Duration] {
        &self.boundaries
    }

    /// Indices of the phases *entered* when progress moves from `before` to
    /// `after`, in order.
    ///
    /// Only internal boundaries are considered: entering "phase n" (i.e.
    /// completion) is not reported here; test `after >= total()` for that.
    pub fn entered(&self, before: Duration, after: Duration) -> impl Iterator<Item = usize> + '_ {
        let internal = &self.boundaries[..self.boundaries.len() - 1];
        internal
            .iter()
            .enumerate()
            .filter(move |&(_, &b)| before < b && b <= after)
            .map(|(i, _)| i + 1)
    }

    /// Index of the phase that progress `elapsed` falls in, clamped to the
    /// last phase.
    pub fn phase_at(&self, elapsed: Duration) -> usize {
        self.boundaries
            .iter()
            .position(|&b| elapsed < b)
            .unwrap_or(self.durations.len() - 1)
    }
}
