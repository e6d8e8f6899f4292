//! `day-activity` — the activity state machine and everything it talks to.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`activity`]   | `Activity` — status, progress, trigger, phase plan             |
//! | [`kind`]       | `ActivityKind` (`Meal`, `Sleep`, `Feeding`, `Laundry`, `Drying`) |
//! | [`phase`]      | `PhasePlan` — phase durations and cumulative boundaries        |
//! | [`status`]     | `Status` lifecycle enum                                        |
//! | [`effect`]     | `Effect` (`Satisfied`, `Arm`) — cross-activity side effects    |
//! | [`transcript`] | `Transcript` trait, `TranscriptEntry`, `TranscriptLog`, `Tee`  |
//! | [`loader`]     | CSV routine loader                                             |
//! | [`error`]      | `ActivityError`, `ActivityResult<T>`                           |
//!
//! # Design notes
//!
//! An activity never touches another activity or the reporting sink.
//! Advancing it does two things:
//!
//! 1. **Notices** go straight to the `&mut dyn Transcript` passed in.
//!
//! 2. **Effects** (a satisfied need, arming a follow-on activity) are
//!    returned as `Vec<Effect>` and applied by the scheduler right after the
//!    call.
//!
//! This keeps ownership flat: the scheduler owns every activity in one
//! arena and refers to them by `ActivityId`.

pub mod activity;
pub mod effect;
pub mod error;
pub mod kind;
pub mod loader;
pub mod phase;
pub mod status;
pub mod transcript;


pub use activity::Activity;
pub use effect::Effect;
pub use error::{ActivityError, ActivityResult};
pub use kind::ActivityKind;
pub use loader::{load_routine_csv, load_routine_reader};
pub use phase::PhasePlan;
pub use status::Status;
pub use transcript::{
    EntryKind, NoopTranscript, Tee, Transcript, TranscriptEntry, TranscriptExt, TranscriptLog,
};
