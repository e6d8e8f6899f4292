//! Cross-activity side effects of advancing an activity.

use day_core::{ActivityId, SimTime};

/// Something an activity wants done outside itself during the current tick.
///
/// Effects are returned by [`Activity::process`][crate::Activity::process]
/// and applied by the scheduler right after the call, before the activity
/// is retired.  Activities never hold references to each other or to the
/// reporting sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A tracked need was satisfied (a feeding happened).
    ///
    /// Forwarded to `Reporter::notify_satisfaction`.
    Satisfied,

    /// Arm the causal trigger of `target` so it becomes ready at `at`.
    Arm {
        target: ActivityId,
        at:     SimTime,
    },
}
