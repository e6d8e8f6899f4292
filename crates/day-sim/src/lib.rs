//! `day-sim` — the scheduler and the tick loop that drives it.
//!
//! # Tick loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   now = start + step * config.step
//!   observer.on_tick_start(now)
//!   ① Sweep    — waiting activities whose trigger is due are admitted.
//!   ② Idle     — nothing queued → reporter.notify_idle(step).
//!   ③ Select   — queue head; pause the previous activity if different.
//!   ④ Advance  — head.process(now, step); apply effects:
//!                  Satisfied         → reporter.notify_satisfaction()
//!                  Arm { target, at } → target.arm(at)
//!   ⑤ Retire   — completed head → finalize → waiting pool.
//!   observer.on_tick_end(now, step, outcome, &mut reporter)
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use day_activity::{Activity, NoopTranscript};
//! use day_core::{SimConfig, SimTime};
//! use day_sim::{NoopObserver, NoopReporter, SimBuilder};
//!
//! let start = SimTime::parse("2023-04-02 07:00")?;
//! let config = SimConfig::for_days(start, 60, 2, 42);
//! let mut sim = SimBuilder::new(config, NoopReporter, NoopTranscript)
//!     .activities([Activity::sleep(start, false)?])
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod reporter;
pub mod scheduler;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use reporter::{NoopReporter, Reporter, TallyReporter};
pub use scheduler::{Scheduler, TickOutcome};
pub use sim::Sim;
