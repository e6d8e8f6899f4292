//! `Scheduler` — decides which activity runs on each tick.
//!
//! # One tick
//!
//! ```text
//! ① Sweep    — poll every waiting activity; each ready one is admitted to
//!              the ready queue with the next sequence number.
//! ② Idle     — queue empty → report one step of idle time, done.
//! ③ Select   — head = min (priority, seq).  If a *different* activity was
//!              running, pause it and report a preemption.
//! ④ Advance  — head.process(now, step); apply the returned effects.
//! ⑤ Retire   — head completed → remove from queue, finalize, back to the
//!              waiting pool.
//! ```
//!
//! Waiting and queued activities are disjoint.  A preempted activity keeps
//! its queue key, so it resumes as soon as it is the head again with all
//! of its progress.

use std::time::Duration;

use tracing::{debug, trace, warn};

use day_activity::{Activity, ActivityKind, Effect, Status, Transcript};
use day_core::{ActivityId, SimTime};
use day_schedule::ReadyQueue;

use crate::{Reporter, SimError, SimResult};

/// What happened on one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing was queued; one step of idle time was reported.
    Idle,
    /// `activity` was advanced by one step.
    Advanced {
        activity:  ActivityId,
        /// The previously running activity, if it was preempted this tick.
        preempted: Option<ActivityId>,
        /// `activity` completed and went back to the waiting pool.
        completed: bool,
    },
}

/// Owns every activity, the ready queue and both sinks.
pub struct Scheduler<R: Reporter, T: Transcript> {
    activities: Vec<Activity>,
    waiting:    Vec<ActivityId>,
    queue:      ReadyQueue,
    running:    Option<ActivityId>,
    reporter:   R,
    transcript: T,
}

impl<R: Reporter, T: Transcript> Scheduler<R, T> {
    /// Take ownership of `activities`; `activities[i]` gets `ActivityId(i)`.
    ///
    /// All activities start in the waiting pool.  Fails if a laundry
    /// activity's follow-on does not exist or is not causally triggered, or
    /// if an activity has already been admitted.
    pub fn new(activities: Vec<Activity>, reporter: R, transcript: T) -> SimResult<Self> {
        if activities.len() > ActivityId::INVALID.index() {
            return Err(SimError::TooManyActivities { count: activities.len() });
        }
        validate_follow_ons(&activities)?;
        if let Some(a) = activities.iter().find(|a| a.status() != Status::Pending) {
            return Err(SimError::Config(format!(
                "{} must be PENDING when scheduling starts, found {}",
                a.name(),
                a.status()
            )));
        }

        let waiting = (0..activities.len()).map(|i| ActivityId(i as u16)).collect();
        Ok(Self {
            activities,
            waiting,
            queue: ReadyQueue::new(),
            running: None,
            reporter,
            transcript,
        })
    }

    // ── Per-tick API ──────────────────────────────────────────────────────

    /// Run one full tick: sweep, then either report idle time or advance
    /// the head of the queue.
    pub fn tick(&mut self, now: SimTime, step: Duration) -> TickOutcome {
        if self.admit_ready(now, step) {
            self.process_next(now, step)
        } else {
            TickOutcome::Idle
        }
    }

    /// Admit every waiting activity whose trigger is due at `now`.
    ///
    /// Returns `false`, after reporting `step` of idle time, if nothing is
    /// queued afterwards.
    pub fn admit_ready(&mut self, now: SimTime, step: Duration) -> bool {
        let activities = &mut self.activities;
        let queue = &mut self.queue;
        self.waiting.retain(|&id| {
            let activity = &mut activities[id.index()];
            if !activity.is_ready(now) {
                return true;
            }
            let key = queue.admit(activity.priority(), id);
            debug!(%now, activity = activity.name(), priority = key.priority, seq = key.seq, "admitted");
            false
        });

        if self.queue.is_empty() {
            trace!(%now, "idle");
            self.reporter.notify_idle(step);
            false
        } else {
            true
        }
    }

    /// Select the queue head, preempting the previous activity if it differs,
    /// and advance it by `step`.
    ///
    /// # Panics
    ///
    /// If the ready queue is empty.
    pub fn process_next(&mut self, now: SimTime, step: Duration) -> TickOutcome {
        let Some((_, head)) = self.queue.head() else {
            panic!("process_next called with an empty ready queue at {now}");
        };

        // ── Preemption ────────────────────────────────────────────────────
        let preempted = match self.running {
            Some(previous) if previous != head => {
                debug!(
                    %now,
                    preempted = self.activities[previous.index()].name(),
                    by = self.activities[head.index()].name(),
                    "preempted"
                );
                self.activities[previous.index()].pause(now, &mut self.transcript);
                self.reporter.notify_preemption();
                Some(previous)
            }
            _ => None,
        };
        self.running = Some(head);

        // ── Advance ───────────────────────────────────────────────────────
        let effects = self.activities[head.index()].process(now, step, &mut self.transcript);
        for effect in effects {
            self.apply(head, effect);
        }

        // ── Retirement ────────────────────────────────────────────────────
        let completed = self.activities[head.index()].status() == Status::Completed;
        if completed {
            self.running = None;
            let retired = self.queue.pop_head().map(|(_, id)| id);
            assert_eq!(retired, Some(head), "completed activity was not the queue head");
            let activity = &mut self.activities[head.index()];
            activity.finalize();
            debug!(%now, activity = activity.name(), "retired");
            self.waiting.push(head);
        }

        TickOutcome::Advanced { activity: head, preempted, completed }
    }

    fn apply(&mut self, source: ActivityId, effect: Effect) {
        match effect {
            Effect::Satisfied => self.reporter.notify_satisfaction(),
            Effect::Arm { target, at } => {
                let armed = self
                    .activities
                    .get_mut(target.index())
                    .is_some_and(|a| a.arm(at));
                assert!(
                    armed,
                    "{}: cannot arm activity {target}",
                    self.activities[source.index()].name()
                );
                let target = &self.activities[target.index()];
                if target.status() == Status::Pending {
                    debug!(%at, target = target.name(), "armed");
                } else {
                    // Its own finalize will disarm it again.
                    warn!(
                        %at,
                        target = target.name(),
                        status = %target.status(),
                        "armed an activity that is not pending; the arm will be lost"
                    );
                }
            }
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn activity(&self, id: ActivityId) -> &Activity {
        &self.activities[id.index()]
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Look up an activity by name.
    pub fn find(&self, name: &str) -> Option<ActivityId> {
        self.activities
            .iter()
            .position(|a| a.name() == name)
            .map(|i| ActivityId(i as u16))
    }

    /// Activities waiting for their trigger.
    pub fn waiting(&self) -> &[ActivityId] {
        &self.waiting
    }

    /// Admitted activities (ready, running or paused), in queue order.
    pub fn queue(&self) -> &ReadyQueue {
        &self.queue
    }

    /// The activity advanced on the last tick, unless it completed.
    pub fn running(&self) -> Option<ActivityId> {
        self.running
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    pub fn transcript(&self) -> &T {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut T {
        &mut self.transcript
    }

    /// Consume the scheduler, returning both sinks.
    pub fn into_sinks(self) -> (R, T) {
        (self.reporter, self.transcript)
    }
}

/// Every laundry follow-on must name an existing, causally triggered
/// activity.
fn validate_follow_ons(activities: &[Activity]) -> SimResult<()> {
    for activity in activities {
        let ActivityKind::Laundry { dryer, .. } = activity.kind() else {
            continue;
        };
        let Some(target) = activities.get(dryer.index()) else {
            return Err(SimError::UnknownFollowOn {
                activity: activity.name().to_owned(),
                target:   dryer,
            });
        };
        if !target.trigger().is_causal() {
            return Err(SimError::NotCausal {
                activity: activity.name().to_owned(),
                target:   target.name().to_owned(),
            });
        }
    }
    Ok(())
}
