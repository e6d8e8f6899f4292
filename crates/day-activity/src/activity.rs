//! `Activity` — one recurring routine activity and its state machine.
//!
//! # Lifecycle
//!
//! ```text
//! PENDING → READY → RUNNING ⇄ PAUSED → COMPLETED → (finalize) → PENDING
//! ```
//!
//! | Operation  | Accepted in               | Effect                                     |
//! |------------|---------------------------|--------------------------------------------|
//! | `is_ready` | PENDING                   | trigger due → READY                        |
//! | `process`  | READY / RUNNING / PAUSED  | elapsed += step, notices, maybe COMPLETED  |
//! | `pause`    | RUNNING                   | → PAUSED (no-op for uninterruptible kinds) |
//! | `finalize` | COMPLETED                 | elapsed = 0, re-arm trigger → PENDING      |
//!
//! Calling an operation in any other status is a programming error in the
//! scheduler and panics with the activity name, operation and status.

use std::time::Duration;

use day_core::{ActivityId, SimRng, SimTime, TimeOfDay, minutes};
use day_schedule::{CausalTrigger, DailyTrigger, NeedModel, NeedParams, Trigger};

use crate::{
    ActivityError, ActivityKind, ActivityResult, EntryKind, Effect, PhasePlan, Status, Transcript,
    TranscriptEntry,
};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const MEAL_PRIORITY: u32 = 5;
pub const SLEEP_PRIORITY: u32 = 5;
pub const FEEDING_PRIORITY: u32 = 0;
pub const LAUNDRY_PRIORITY: u32 = 4;
pub const DRYING_PRIORITY: u32 = 4;

pub const BEDTIME: TimeOfDay = time_of_day(23, 0);
pub const SLEEP_MINUTES: u64 = 7 * 60;
pub const LAUNDRY_TIME: TimeOfDay = time_of_day(9, 0);
pub const LAUNDRY_MINUTES: u64 = 10;
pub const WASH_MINUTES: u64 = 120;
pub const FEEDING_PHASES: [u64; 3] = [10, 30, 5];
pub const DRYING_PHASES: [u64; 2] = [10, 20];

const fn time_of_day(hour: u8, minute: u8) -> TimeOfDay {
    match TimeOfDay::new(hour, minute) {
        Some(t) => t,
        None => panic!("invalid time-of-day constant"),
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// A recurring activity: what it is, when it becomes ready, how long it
/// takes, and how far along it is.
#[derive(Debug)]
pub struct Activity {
    name:         String,
    priority:     u32,
    kind:         ActivityKind,
    trigger:      Trigger,
    plan:         PhasePlan,
    status:       Status,
    elapsed:      Duration,
    completed_at: Option<SimTime>,
}

impl Activity {
    pub fn new(
        name:     impl Into<String>,
        priority: u32,
        kind:     ActivityKind,
        trigger:  Trigger,
        plan:     PhasePlan,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            kind,
            trigger,
            plan,
            status: Status::Pending,
            elapsed: Duration::ZERO,
            completed_at: None,
        }
    }

    /// A meal at `at` every day with prepare/eat/clean-up phases in minutes.
    pub fn meal(
        start:      SimTime,
        name:       impl Into<String>,
        at:         TimeOfDay,
        phases:     [u64; 3],
        skip_today: bool,
    ) -> ActivityResult<Self> {
        let name = name.into();
        let plan = plan_from_minutes(&name, &phases)?;
        let trigger = DailyTrigger::new(start, at, skip_today);
        Ok(Self::new(name, MEAL_PRIORITY, ActivityKind::Meal, trigger.into(), plan))
    }

    /// Seven hours of sleep from 23:00.
    pub fn sleep(start: SimTime, skip_today: bool) -> ActivityResult<Self> {
        let plan = plan_from_minutes("Sleep", &[SLEEP_MINUTES])?;
        let trigger = DailyTrigger::new(start, BEDTIME, skip_today);
        Ok(Self::new("Sleep", SLEEP_PRIORITY, ActivityKind::Sleep, trigger.into(), plan))
    }

    /// Milk feeding whenever the baby is hungry again.
    ///
    /// The need counts as satisfied at `now`.
    pub fn feeding(now: SimTime, params: NeedParams, rng: SimRng) -> ActivityResult<Self> {
        let plan = plan_from_minutes("Milk Feeding", &FEEDING_PHASES)?;
        let trigger = NeedModel::new(now, params, rng)?;
        Ok(Self::new("Milk Feeding", FEEDING_PRIORITY, ActivityKind::Feeding, trigger.into(), plan))
    }

    /// Start the washing machine at 09:00; `dryer` becomes ready two hours
    /// after loading is done.
    pub fn laundry(start: SimTime, dryer: ActivityId, skip_today: bool) -> ActivityResult<Self> {
        let plan = plan_from_minutes("Laundry", &[LAUNDRY_MINUTES])?;
        let trigger = DailyTrigger::new(start, LAUNDRY_TIME, skip_today);
        let kind = ActivityKind::Laundry { dryer, wash: minutes(WASH_MINUTES) };
        Ok(Self::new("Laundry", LAUNDRY_PRIORITY, kind, trigger.into(), plan))
    }

    /// Hang and hold washed clothes; ready only once armed by a laundry.
    pub fn drying() -> ActivityResult<Self> {
        let plan = plan_from_minutes("Airer", &DRYING_PHASES)?;
        let trigger = CausalTrigger::new();
        Ok(Self::new("Airer", DRYING_PRIORITY, ActivityKind::Drying, trigger.into(), plan))
    }

    /// Override the priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn plan(&self) -> &PhasePlan {
        &self.plan
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Progress of the current run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Progress still needed to complete.
    pub fn remaining(&self) -> Duration {
        self.plan.total().saturating_sub(self.elapsed)
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Poll the trigger.  On `true` the activity is READY.
    ///
    /// # Panics
    ///
    /// Unless PENDING.
    pub fn is_ready(&mut self, now: SimTime) -> bool {
        assert!(
            self.status == Status::Pending,
            "{}: is_ready called while {}",
            self.name,
            self.status
        );
        if self.trigger.is_due(now) {
            self.status = Status::Ready;
            true
        } else {
            false
        }
    }

    /// Advance by one `step` starting at `now`.
    ///
    /// Records notices in this order: resumed, started, each phase entered,
    /// completed.  Returns the cross-activity effects for the scheduler to
    /// apply.
    ///
    /// # Panics
    ///
    /// Unless READY, RUNNING or PAUSED.
    pub fn process(
        &mut self,
        now:        SimTime,
        step:       Duration,
        transcript: &mut dyn Transcript,
    ) -> Vec<Effect> {
        assert!(
            self.status.is_active(),
            "{}: process called while {}",
            self.name,
            self.status
        );
        let before = self.elapsed;
        let after = before.saturating_add(step);
        self.elapsed = after;
        let end = now + step;
        let mut effects = Vec::new();

        if self.status == Status::Paused {
            let text = self.kind.resumed_text(&self.name);
            self.note(transcript, now, EntryKind::Resumed, text);
        }
        self.status = Status::Running;

        if before.is_zero() {
            let text = self.kind.started_text(&self.plan);
            self.note(transcript, now, EntryKind::Started, text);
        }

        let entered: Vec<usize> = self.plan.entered(before, after).collect();
        for index in entered {
            let text = self.kind.phase_text(index, &self.plan);
            self.note(transcript, end, EntryKind::Phase, text);
            self.kind.phase_effects(index, &self.plan, &mut effects);
        }

        if after >= self.plan.total() {
            self.status = Status::Completed;
            self.completed_at = Some(end);
            let text = self.kind.completed_text(&self.name);
            self.note(transcript, end, EntryKind::Completed, text);
            self.kind.completion_effects(end, &self.plan, &mut effects);
        }

        effects
    }

    /// Preempt.  Progress is kept.
    ///
    /// Uninterruptible kinds ignore the request and stay RUNNING.
    ///
    /// # Panics
    ///
    /// Unless RUNNING.
    pub fn pause(&mut self, now: SimTime, transcript: &mut dyn Transcript) {
        assert!(
            self.status == Status::Running,
            "{}: pause called while {}",
            self.name,
            self.status
        );
        if !self.kind.is_interruptible() {
            return;
        }
        self.status = Status::Paused;
        let text = self.kind.suspended_text().to_owned();
        self.note(transcript, now, EntryKind::Suspended, text);
    }

    /// Reset after completion and re-arm the trigger for the next run.
    ///
    /// # Panics
    ///
    /// Unless COMPLETED.
    pub fn finalize(&mut self) {
        assert!(
            self.status == Status::Completed,
            "{}: finalize called while {}",
            self.name,
            self.status
        );
        let Some(completed_at) = self.completed_at.take() else {
            panic!("{}: COMPLETED without a completion time", self.name);
        };
        self.trigger.rearm(completed_at);
        self.elapsed = Duration::ZERO;
        self.status = Status::Pending;
    }

    /// Arm a causal trigger to fire at `at`.
    ///
    /// Returns `false` if this activity is not causally triggered.
    pub fn arm(&mut self, at: SimTime) -> bool {
        self.trigger.arm(at)
    }

    fn note(&self, transcript: &mut dyn Transcript, at: SimTime, kind: EntryKind, text: String) {
        transcript.record(&TranscriptEntry { at, activity: self.name.clone(), kind, text });
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plan_from_minutes(name: &str, phases: &[u64]) -> ActivityResult<PhasePlan> {
    PhasePlan::from_minutes(phases).ok_or_else(|| {
        ActivityError::Config(format!(
            "{name}: phases {phases:?} must be non-empty and every phase longer than zero"
        ))
    })
}
