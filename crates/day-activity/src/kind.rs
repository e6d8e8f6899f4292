//! `ActivityKind` — the closed set of routine activities and their wording.
//!
//! The kind decides two things the state machine leaves open:
//!
//! - **pause policy**: whether preemption suspends the activity or is
//!   ignored (a feeding in progress is never interrupted);
//! - **wording**: the transcript text for each notice.
//!
//! | Kind      | Pause   | Extra effect                                    |
//! |-----------|---------|-------------------------------------------------|
//! | `Meal`    | suspend | none                                            |
//! | `Sleep`   | suspend | none                                            |
//! | `Feeding` | ignored | `Satisfied` when the last phase (clean-up) starts |
//! | `Laundry` | suspend | `Arm { dryer }` at completion + wash time       |
//! | `Drying`  | suspend | none                                            |

use std::time::Duration;

use day_core::{ActivityId, SimTime};

use crate::{Effect, PhasePlan};

/// What an activity is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ActivityKind {
    /// Prepare, eat, clean up.
    Meal,
    /// One long stretch, seven hours by default.
    Sleep,
    /// Prepare milk, feed, clean up.  Driven by a need trigger.
    Feeding,
    /// Load the machine; the wash itself runs unattended for `wash`, after
    /// which `dryer` becomes ready.
    Laundry { dryer: ActivityId, wash: Duration },
    /// Hang clothes, hold them until dry.  Driven by a causal trigger.
    Drying,
}

impl ActivityKind {
    /// Short lowercase label, as used in routine files.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Meal => "meal",
            ActivityKind::Sleep => "sleep",
            ActivityKind::Feeding => "feeding",
            ActivityKind::Laundry { .. } => "laundry",
            ActivityKind::Drying => "drying",
        }
    }

    /// `false` if `pause` is a no-op for this kind.
    #[inline]
    pub fn is_interruptible(self) -> bool {
        !matches!(self, ActivityKind::Feeding)
    }

    /// Effects emitted when phase `index` is entered.
    pub(crate) fn phase_effects(self, index: usize, plan: &PhasePlan, out: &mut Vec<Effect>) {
        if self == ActivityKind::Feeding && index + 1 == plan.len() {
            out.push(Effect::Satisfied);
        }
    }

    /// Effects emitted on completion at `done` (`now + step`).
    pub(crate) fn completion_effects(self, done: SimTime, plan: &PhasePlan, out: &mut Vec<Effect>) {
        match self {
            // Single-phase feeding has no clean-up phase to enter.
            ActivityKind::Feeding if plan.len() == 1 => out.push(Effect::Satisfied),
            ActivityKind::Laundry { dryer, wash } => {
                out.push(Effect::Arm { target: dryer, at: done + wash });
            }
            _ => {}
        }
    }

    // ── Wording ───────────────────────────────────────────────────────────

    pub(crate) fn started_text(self, plan: &PhasePlan) -> String {
        let first = mins(plan.duration(0));
        match self {
            ActivityKind::Meal => format!("Start preparing. Takes {first} min."),
            ActivityKind::Sleep => "Start sleeping. Good night!!".to_owned(),
            ActivityKind::Feeding => {
                format!("Baby is crying. Start preparing milk. Takes {first} min.")
            }
            ActivityKind::Laundry { .. } => {
                format!("Gather clothes and start the washing machine. Takes {first} min.")
            }
            ActivityKind::Drying => {
                format!("Washing is done. Start hanging clothes. Takes {first} min.")
            }
        }
    }

    pub(crate) fn resumed_text(self, name: &str) -> String {
        match self {
            ActivityKind::Sleep => "Start sleeping again.".to_owned(),
            _ => format!("Resume {name} event."),
        }
    }

    pub(crate) fn phase_text(self, index: usize, plan: &PhasePlan) -> String {
        let takes = mins(plan.duration(index));
        match (self, index) {
            (ActivityKind::Meal, 1) => format!("Start eating. Takes {takes} min."),
            (ActivityKind::Meal, 2) => format!("Start cleaning up. Takes {takes} min."),
            (ActivityKind::Feeding, 1) => format!("Start feeding. Takes {takes} min."),
            (ActivityKind::Feeding, 2) => format!("Start clean up. Takes {takes} min."),
            (ActivityKind::Drying, 1) => format!("Start holding dried clothes. Takes {takes} min."),
            _ => format!("Start phase {}. Takes {takes} min.", index + 1),
        }
    }

    pub(crate) fn suspended_text(self) -> &'static str {
        match self {
            ActivityKind::Sleep => "Get up in the middle.",
            _ => "Suspend the event.",
        }
    }

    pub(crate) fn completed_text(self, name: &str) -> String {
        match self {
            ActivityKind::Meal => format!("{name} event is completed."),
            ActivityKind::Sleep => "Bedtime is over. Good morning!!".to_owned(),
            ActivityKind::Feeding => "The event is completed.".to_owned(),
            ActivityKind::Laundry { wash, .. } => {
                format!("Washing machine is running. Clothes are ready in {} min.", mins(wash))
            }
            ActivityKind::Drying => "Clothes are dry and put away.".to_owned(),
        }
    }
}

/// Whole minutes, rounded down.
#[inline]
fn mins(d: Duration) -> u64 {
    d.as_secs() / 60
}
