//! Fluent builder for constructing a [`Sim`].

use day_activity::{Activity, Transcript};
use day_core::{ActivityId, SimConfig};

use crate::{Reporter, Scheduler, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R, T>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: start time, step, number of steps, seed
/// - `R: Reporter`: receives idle time, satisfactions and preemptions
/// - `T: Transcript`: receives activity notices
/// - at least one [`Activity`]
///
/// Activities get ids in the order they are added.  A laundry activity
/// refers to its drying activity by id, so reserve it first with
/// [`next_id`][Self::next_id]:
///
/// ```rust,ignore
/// let mut builder = SimBuilder::new(config, DailyReporter::new(), ConsoleTranscript::stdout());
/// let airer = builder.next_id();
/// builder.add_activity(Activity::drying()?);
/// builder.add_activity(Activity::laundry(start, airer, false)?);
/// let mut sim = builder.build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<R: Reporter, T: Transcript> {
    config:     SimConfig,
    activities: Vec<Activity>,
    reporter:   R,
    transcript: T,
}

impl<R: Reporter, T: Transcript> SimBuilder<R, T> {
    /// Create a builder with all required sinks and no activities.
    pub fn new(config: SimConfig, reporter: R, transcript: T) -> Self {
        Self { config, activities: Vec::new(), reporter, transcript }
    }

    /// The id the next added activity will receive.
    pub fn next_id(&self) -> ActivityId {
        ActivityId::try_from(self.activities.len()).unwrap_or(ActivityId::INVALID)
    }

    /// Add one activity and return its id.
    pub fn add_activity(&mut self, activity: Activity) -> ActivityId {
        let id = self.next_id();
        self.activities.push(activity);
        id
    }

    /// Append several activities, in order.
    pub fn activities(mut self, activities: impl IntoIterator<Item = Activity>) -> Self {
        self.activities.extend(activities);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Fails on a zero step, an empty routine or a dangling follow-on.
    pub fn build(self) -> SimResult<Sim<R, T>> {
        if self.config.step_secs == 0 {
            return Err(SimError::Config("step must be longer than zero".into()));
        }
        if self.activities.is_empty() {
            return Err(SimError::Config("no activities to schedule".into()));
        }

        let scheduler = Scheduler::new(self.activities, self.reporter, self.transcript)?;
        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            scheduler,
        })
    }
}
