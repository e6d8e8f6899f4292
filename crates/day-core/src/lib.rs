//! `day-core` — foundational types for the day-routine scheduler.
//!
//! This crate is a dependency of every other `day-*` crate.  It intentionally
//! has no `day-*` dependencies and minimal external ones (`rand`, `chrono`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActivityId`                                          |
//! | [`time`]        | `SimTime`, `TimeOfDay`, `SimClock`, `SimConfig`       |
//! | [`rng`]         | `SimRng` (seedable, splittable)                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::ActivityId;
pub use rng::SimRng;
pub use time::{DAY, SimClock, SimConfig, SimTime, TimeOfDay, minutes};
