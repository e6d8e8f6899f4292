//! `Trigger` — the closed set of readiness conditions.

use day_core::SimTime;

use crate::{CausalTrigger, DailyTrigger, NeedModel};

/// What makes a pending activity ready.
#[derive(Debug)]
pub enum Trigger {
    /// Due at a fixed time of day.
    Daily(DailyTrigger),
    /// Due once a stochastic need recurs.
    Need(NeedModel),
    /// Due once another activity has armed it.
    Causal(CausalTrigger),
}

impl Trigger {
    #[inline]
    pub fn is_due(&self, now: SimTime) -> bool {
        match self {
            Trigger::Daily(t) => t.is_due(now),
            Trigger::Need(t) => t.is_due(now),
            Trigger::Causal(t) => t.is_due(now),
        }
    }

    /// Move to the next occurrence after the activity completed at
    /// `completed_at`:
    ///
    /// - daily  → next day, same time;
    /// - need   → satisfied at `completed_at`, fresh interval;
    /// - causal → disarmed.
    pub fn rearm(&mut self, completed_at: SimTime) {
        match self {
            Trigger::Daily(t) => t.advance(),
            Trigger::Need(t) => t.satisfy(completed_at),
            Trigger::Causal(t) => t.disarm(),
        }
    }

    /// Arm a causal trigger.  Returns `false` (and does nothing) for the
    /// other variants.
    pub fn arm(&mut self, at: SimTime) -> bool {
        match self {
            Trigger::Causal(t) => {
                t.arm(at);
                true
            }
            Trigger::Daily(_) | Trigger::Need(_) => false,
        }
    }

    pub fn is_causal(&self) -> bool {
        matches!(self, Trigger::Causal(_))
    }
}

impl From<DailyTrigger> for Trigger {
    fn from(t: DailyTrigger) -> Self {
        Trigger::Daily(t)
    }
}

impl From<NeedModel> for Trigger {
    fn from(t: NeedModel) -> Self {
        Trigger::Need(t)
    }
}

impl From<CausalTrigger> for Trigger {
    fn from(t: CausalTrigger) -> Self {
        Trigger::Causal(t)
    }
}
