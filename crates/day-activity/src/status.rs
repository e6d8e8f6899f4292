//! Activity lifecycle status.

use std::fmt;

/// Where an activity is in its lifecycle.
///
/// ```text
/// PENDING ──is_ready──▶ READY ──process──▶ RUNNING ⇄ PAUSED
///    ▲                                        │
///    └───────────── finalize ◀── COMPLETED ◀──┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Status {
    /// Waiting for its trigger.
    #[default]
    Pending,
    /// Admitted to the ready queue, not yet advanced.
    Ready,
    /// Advanced on the most recent tick it was selected.
    Running,
    /// Preempted; progress is kept.
    Paused,
    /// Total duration reached; awaiting `finalize`.
    Completed,
}

impl Status {
    /// `true` for the statuses `process` accepts.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Status::Ready | Status::Running | Status::Paused)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pending => "PENDING",
            Status::Ready => "READY",
            Status::Running => "RUNNING",
            Status::Paused => "PAUSED",
            Status::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}
