//! The `Sim` struct and its tick loop.

use day_activity::Transcript;
use day_core::{SimClock, SimConfig, SimTime};

use crate::{Reporter, Scheduler, SimObserver, TickOutcome};

/// The main simulation runner.
///
/// `Sim<R, T>` pairs a [`Scheduler`] with the clock that drives it.  Each
/// tick it hands the scheduler the current `(now, step)` pair, then
/// advances the clock by exactly one step.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Reporter, T: Transcript> {
    /// Start time, step length, number of steps, seed.
    pub config: SimConfig,

    /// Simulation clock: tracks the current step and maps it to wall time.
    pub clock: SimClock,

    /// Activities, ready queue and sinks.
    pub scheduler: Scheduler<R, T>,
}

impl<R: Reporter, T: Transcript> Sim<R, T> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current step to `config.total_steps`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver<R>>(&mut self, observer: &mut O) {
        while self.clock.current_step < self.config.total_steps {
            self.process_tick(observer);
        }
        observer.on_sim_end(self.clock.now());
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_steps`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver<R>>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.process_tick(observer);
        }
    }

    /// Start time of the next tick.
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    /// Consume the simulation, returning the reporter and transcript.
    pub fn into_sinks(self) -> (R, T) {
        self.scheduler.into_sinks()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver<R>>(&mut self, observer: &mut O) -> TickOutcome {
        let now = self.clock.now();
        let step = self.clock.step;

        observer.on_tick_start(now);
        let outcome = self.scheduler.tick(now, step);
        observer.on_tick_end(now, step, &outcome, self.scheduler.reporter_mut());

        self.clock.advance();
        outcome
    }
}
