//! `day-schedule` — readiness triggers and the priority ready queue.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`daily`]       | `DailyTrigger` (fixed time of day, +1 day per completion) |
//! | [`need`]        | `NeedModel`, `NeedParams` (normally distributed interval) |
//! | [`causal`]      | `CausalTrigger` (armed by another activity)               |
//! | [`trigger`]     | `Trigger` — closed enum over the three                    |
//! | [`ready_queue`] | `ReadyQueue`, `QueueKey` (`BTreeMap<(prio, seq), id>`)    |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Readiness model (summary)
//!
//! ```text
//! daily   due ⇔ now ≥ next_due                 rearm: next_due += 1 day
//! need    due ⇔ now − last_satisfied ≥ interval rearm: redraw interval
//! causal  due ⇔ armed ∧ now ≥ armed_at          rearm: disarm
//! ```

pub mod causal;
pub mod daily;
pub mod error;
pub mod need;
pub mod ready_queue;
pub mod trigger;


pub use causal::CausalTrigger;
pub use daily::DailyTrigger;
pub use error::{ScheduleError, ScheduleResult};
pub use need::{NeedModel, NeedParams};
pub use ready_queue::{QueueKey, ReadyQueue};
pub use trigger::Trigger;
