//! Integration tests for day-sim.

use std::time::Duration;

use day_activity::{Activity, ActivityKind, NoopTranscript, PhasePlan, TranscriptLog};
use day_core::{ActivityId, SimConfig, SimTime, TimeOfDay, minutes};
use day_schedule::DailyTrigger;

use crate::{Scheduler, SimBuilder, TallyReporter, TickOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn start() -> SimTime {
    SimTime::from_ymd_hm(2023, 4, 2, 7, 0).unwrap()
}

fn at(hour: u32, minute: u32) -> SimTime {
    SimTime::from_ymd_hm(2023, 4, 2, hour, minute).unwrap()
}

fn tod(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

fn test_config(total_steps: u64) -> SimConfig {
    SimConfig { start: start(), step_secs: 60, total_steps, seed: 42 }
}

/// A daily meal-like activity with custom priority and phases.
fn daily(name: &str, priority: u32, hour: u8, minute: u8, phases: &[u64]) -> Activity {
    Activity::new(
        name,
        priority,
        ActivityKind::Meal,
        DailyTrigger::new(start(), tod(hour, minute), false).into(),
        PhasePlan::from_minutes(phases).unwrap(),
    )
}

fn scheduler(activities: Vec<Activity>) -> Scheduler<TallyReporter, TranscriptLog> {
    Scheduler::new(activities, TallyReporter::default(), TranscriptLog::new()).unwrap()
}

/// Tick `s` once per minute over `[from, to)`, collecting outcomes.
fn run_span(
    s:    &mut Scheduler<TallyReporter, TranscriptLog>,
    from: SimTime,
    to:   SimTime,
) -> Vec<(SimTime, TickOutcome)> {
    let mut out = Vec::new();
    let mut now = from;
    while now < to {
        out.push((now, s.tick(now, minutes(1))));
        now += minutes(1);
    }
    out
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_successfully() {
        let sim = SimBuilder::new(test_config(10), TallyReporter::default(), NoopTranscript)
            .activities([daily("Breakfast", 5, 8, 0, &[15, 10, 10])])
            .build()
            .unwrap();
        assert_eq!(sim.scheduler.activities().len(), 1);
        assert_eq!(sim.scheduler.waiting(), &[ActivityId(0)]);
        assert_eq!(sim.now(), start());
    }

    #[test]
    fn zero_step_errors() {
        let mut config = test_config(10);
        config.step_secs = 0;
        let result = SimBuilder::new(config, TallyReporter::default(), NoopTranscript)
            .activities([daily("Breakfast", 5, 8, 0, &[15, 10, 10])])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_routine_errors() {
        let result = SimBuilder::new(test_config(10), TallyReporter::default(), NoopTranscript).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn ids_follow_insertion_order() {
        let mut b = SimBuilder::new(test_config(10), TallyReporter::default(), NoopTranscript);
        assert_eq!(b.next_id(), ActivityId(0));
        let airer = b.next_id();
        assert_eq!(b.add_activity(Activity::drying().unwrap()), airer);
        assert_eq!(b.add_activity(Activity::laundry(start(), airer, false).unwrap()), ActivityId(1));
        assert_eq!(b.next_id(), ActivityId(2));
        assert!(b.build().is_ok());
    }

    #[test]
    fn dangling_follow_on_errors() {
        let mut b = SimBuilder::new(test_config(10), TallyReporter::default(), NoopTranscript);
        b.add_activity(Activity::laundry(start(), ActivityId(5), false).unwrap());
        assert!(matches!(b.build(), Err(SimError::UnknownFollowOn { target: ActivityId(5), .. })));
    }

    #[test]
    fn follow_on_must_be_causal() {
        let mut b = SimBuilder::new(test_config(10), TallyReporter::default(), NoopTranscript);
        let sleep = b.add_activity(Activity::sleep(start(), false).unwrap());
        b.add_activity(Activity::laundry(start(), sleep, false).unwrap());
        assert!(matches!(b.build(), Err(SimError::NotCausal { .. })));
    }
}

// ── Scheduling ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use day_activity::{EntryKind, Status};

    use super::*;

    #[test]
    fn empty_queue_reports_one_step_of_idle_time() {
        let mut s = scheduler(vec![daily("Breakfast", 5, 8, 0, &[15, 10, 10])]);
        assert_eq!(s.tick(at(7, 0), minutes(1)), TickOutcome::Idle);
        assert_eq!(s.reporter().idle, minutes(1));
        assert_eq!(s.tick(at(7, 1), Duration::from_secs(90)), TickOutcome::Idle);
        assert_eq!(s.reporter().idle, Duration::from_secs(150));
        assert!(s.running().is_none());
    }

    #[test]
    fn breakfast_runs_to_completion_and_returns_to_waiting() {
        let mut s = scheduler(vec![daily("Breakfast", 5, 8, 0, &[15, 10, 10])]);
        let outcomes = run_span(&mut s, at(7, 0), at(9, 0));

        let advanced = outcomes.iter().filter(|(_, o)| matches!(o, TickOutcome::Advanced { .. })).count();
        assert_eq!(advanced, 35);
        let (done_at, _) = outcomes
            .iter()
            .find(|(_, o)| matches!(o, TickOutcome::Advanced { completed: true, .. }))
            .unwrap();
        assert_eq!(*done_at, at(8, 34));

        assert_eq!(s.reporter().idle, minutes(120 - 35));
        assert_eq!(s.waiting(), &[ActivityId(0)]);
        assert!(s.queue().is_empty());
        assert_eq!(s.activity(ActivityId(0)).status(), Status::Pending);
        assert_eq!(s.transcript().entries().last().unwrap().at, at(8, 35));
    }

    #[test]
    fn priority_zero_beats_five_regardless_of_admission_order() {
        for reversed in [false, true] {
            let mut acts = vec![daily("Meal", 5, 8, 0, &[5]), daily("Urgent", 0, 8, 0, &[5])];
            if reversed {
                acts.reverse();
            }
            let mut s = scheduler(acts);
            let urgent = s.find("Urgent").unwrap();
            let meal = s.find("Meal").unwrap();
            match s.tick(at(8, 0), minutes(1)) {
                TickOutcome::Advanced { activity, preempted: None, completed: false } => {
                    assert_eq!(activity, urgent);
                }
                other => panic!("unexpected outcome {other:?}"),
            }

            // Urgent keeps the head until it completes at 08:05.
            for minute in 1..4 {
                let outcome = s.tick(at(8, minute), minutes(1));
                assert_eq!(
                    outcome,
                    TickOutcome::Advanced { activity: urgent, preempted: None, completed: false }
                );
            }
            assert_eq!(
                s.tick(at(8, 4), minutes(1)),
                TickOutcome::Advanced { activity: urgent, preempted: None, completed: true }
            );
            assert_eq!(s.activity(meal).elapsed(), Duration::ZERO);

            // The waiting meal starts on the very next tick.
            assert_eq!(
                s.tick(at(8, 5), minutes(1)),
                TickOutcome::Advanced { activity: meal, preempted: None, completed: false }
            );
            assert_eq!(s.activity(meal).elapsed(), minutes(1));
            assert_eq!(s.running(), Some(meal));
            assert_eq!(s.reporter().preemptions, 0);
            assert_eq!(s.reporter().idle, Duration::ZERO);
        }
    }

    #[test]
    fn equal_priorities_run_fifo_without_preemption() {
        let mut s = scheduler(vec![
            daily("First", 5, 8, 0, &[10]),
            daily("Second", 5, 8, 0, &[10]),
        ]);
        let outcomes = run_span(&mut s, at(8, 0), at(8, 20));
        let order: Vec<ActivityId> = outcomes
            .iter()
            .filter_map(|(_, o)| match o {
                TickOutcome::Advanced { activity, .. } => Some(*activity),
                TickOutcome::Idle => None,
            })
            .collect();
        assert_eq!(&order[..10], &[ActivityId(0); 10]);
        assert_eq!(&order[10..], &[ActivityId(1); 10]);
        assert_eq!(s.reporter().preemptions, 0);
    }

    #[test]
    fn preempted_activity_resumes_next_tick_without_losing_progress() {
        let mut s = scheduler(vec![
            daily("Breakfast", 5, 8, 0, &[15, 10, 10]),
            daily("Phone call", 0, 8, 5, &[3]),
        ]);
        let breakfast = ActivityId(0);
        let call = ActivityId(1);

        run_span(&mut s, at(8, 0), at(8, 5));
        assert_eq!(s.activity(breakfast).elapsed(), minutes(5));

        // 08:05: the call preempts breakfast.
        let outcome = s.tick(at(8, 5), minutes(1));
        assert_eq!(outcome, TickOutcome::Advanced {
            activity:  call,
            preempted: Some(breakfast),
            completed: false,
        });
        assert_eq!(s.activity(breakfast).status(), Status::Paused);
        assert_eq!(s.activity(breakfast).elapsed(), minutes(5));

        run_span(&mut s, at(8, 6), at(8, 8));
        assert_eq!(s.activity(call).status(), Status::Pending);

        // 08:08: breakfast is the head again; resuming is not a preemption.
        let outcome = s.tick(at(8, 8), minutes(1));
        assert_eq!(outcome, TickOutcome::Advanced {
            activity:  breakfast,
            preempted: None,
            completed: false,
        });
        assert_eq!(s.activity(breakfast).elapsed(), minutes(6));
        assert_eq!(s.reporter().preemptions, 1);

        let resumed: Vec<SimTime> = s.transcript().of_kind(EntryKind::Resumed).map(|e| e.at).collect();
        assert_eq!(resumed, vec![at(8, 8)]);
        let suspended: Vec<SimTime> = s.transcript().of_kind(EntryKind::Suspended).map(|e| e.at).collect();
        assert_eq!(suspended, vec![at(8, 5)]);

        // 35 minutes of breakfast plus 3 minutes of call.
        let outcomes = run_span(&mut s, at(8, 9), at(9, 0));
        let (done, _) = outcomes
            .iter()
            .find(|(_, o)| matches!(o, TickOutcome::Advanced { completed: true, .. }))
            .unwrap();
        assert_eq!(*done, at(8, 37));
    }

    #[test]
    fn same_kind_different_activity_still_preempts() {
        let mut s = scheduler(vec![
            daily("Lunch", 5, 12, 0, &[30, 15, 10]),
            daily("Snack", 3, 12, 10, &[5]),
        ]);
        run_span(&mut s, at(12, 0), at(12, 30));
        assert_eq!(s.reporter().preemptions, 1);
        assert_eq!(s.activity(ActivityId(0)).elapsed(), minutes(25));
    }

    #[test]
    fn laundry_arms_airer_two_hours_later() {
        let airer = Activity::drying().unwrap();
        let laundry = Activity::laundry(start(), ActivityId(0), false).unwrap();
        let mut s = scheduler(vec![airer, laundry]);
        run_span(&mut s, at(7, 0), at(12, 0));

        let airer_log: Vec<(SimTime, EntryKind)> =
            s.transcript().for_activity("Airer").map(|e| (e.at, e.kind)).collect();
        assert_eq!(airer_log, vec![
            (at(11, 10), EntryKind::Started),
            (at(11, 20), EntryKind::Phase),
            (at(11, 40), EntryKind::Completed),
        ]);
        assert!(!s.activity(ActivityId(0)).trigger().is_due(at(23, 0)), "disarmed again");
    }

    /// Captures formatted log output for one test.
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn arming_a_busy_airer_warns_and_is_lost() {
        let quick_load = |name: &str, priority: u32, minute: u8| {
            Activity::new(
                name,
                priority,
                ActivityKind::Laundry { dryer: ActivityId(0), wash: minutes(1) },
                DailyTrigger::new(start(), tod(9, minute), false).into(),
                PhasePlan::from_minutes(&[1]).unwrap(),
            )
        };
        let airer = Activity::drying().unwrap();
        // First load arms the airer for 09:02; the urgent second load
        // interrupts it at 09:03 and arms it again while it is paused.
        let mut s = scheduler(vec![airer, quick_load("Whites", 4, 0), quick_load("Colours", 0, 3)]);

        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            run_span(&mut s, at(9, 0), at(23, 0));
        });

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("the arm will be lost"), "{text}");
        assert!(text.contains("PAUSED"), "{text}");

        let completions = s.transcript().for_activity("Airer").filter(|e| e.kind == EntryKind::Completed).count();
        assert_eq!(completions, 1, "the second arm never fires");
        assert!(!s.activity(ActivityId(0)).trigger().is_due(at(23, 0)));
        assert_eq!(s.reporter().preemptions, 1);
    }

    #[test]
    fn feeding_reports_satisfaction_once_per_feeding() {
        use day_core::SimRng;
        use day_schedule::NeedParams;

        let params = NeedParams { mean_minutes: 120.0, std_dev_minutes: 0.0 };
        let feeding = Activity::feeding(start(), params, SimRng::new(1)).unwrap();
        let mut s = scheduler(vec![feeding]);
        // Hungry at 09:00, fed 09:00-09:45, hungry again at 11:45.
        run_span(&mut s, at(7, 0), at(12, 0));
        assert_eq!(s.reporter().satisfactions, 1);
        run_span(&mut s, at(12, 0), at(13, 0));
        assert_eq!(s.reporter().satisfactions, 2);
    }

    #[test]
    fn idle_plus_advanced_is_one_step_per_tick() {
        let mut s = scheduler(vec![
            daily("Breakfast", 5, 8, 0, &[15, 10, 10]),
            daily("Lunch", 5, 12, 0, &[30, 15, 10]),
            daily("Call", 0, 12, 10, &[7]),
        ]);
        let outcomes = run_span(&mut s, at(7, 0), at(15, 0));
        let idle = outcomes.iter().filter(|(_, o)| *o == TickOutcome::Idle).count() as u64;
        let advanced = outcomes.len() as u64 - idle;
        assert_eq!(s.reporter().idle, minutes(idle));
        assert_eq!(advanced, 35 + 55 + 7);
    }

    #[test]
    #[should_panic(expected = "empty ready queue")]
    fn process_next_on_empty_queue_panics() {
        let mut s = scheduler(vec![daily("Breakfast", 5, 8, 0, &[15, 10, 10])]);
        s.process_next(at(7, 0), minutes(1));
    }

    #[test]
    fn admitted_activities_must_start_pending() {
        let mut meal = daily("Breakfast", 5, 8, 0, &[15, 10, 10]);
        assert!(meal.is_ready(at(8, 0)));
        let result = Scheduler::new(vec![meal], TallyReporter::default(), NoopTranscript);
        assert!(result.is_err());
    }
}

// ── Sim loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sim_tests {
    use day_core::SimRng;
    use day_schedule::NeedParams;

    use super::*;
    use crate::{NoopObserver, SimObserver};

    #[derive(Default)]
    struct Counting {
        starts: u64,
        ends:   u64,
        idle:   u64,
        end:    Option<SimTime>,
    }

    impl<R> SimObserver<R> for Counting {
        fn on_tick_start(&mut self, _now: SimTime) {
            self.starts += 1;
        }

        fn on_tick_end(&mut self, _now: SimTime, _step: Duration, outcome: &TickOutcome, _r: &mut R) {
            self.ends += 1;
            if *outcome == TickOutcome::Idle {
                self.idle += 1;
            }
        }

        fn on_sim_end(&mut self, end: SimTime) {
            self.end = Some(end);
        }
    }

    fn household_day(config: &SimConfig) -> Vec<Activity> {
        let start = config.start;
        let mut root = SimRng::new(config.seed);
        vec![
            Activity::meal(start, "Breakfast", tod(8, 0), [15, 10, 10], false).unwrap(),
            Activity::meal(start, "Lunch", tod(12, 0), [30, 15, 10], false).unwrap(),
            Activity::meal(start, "Dinner", tod(18, 0), [45, 30, 15], false).unwrap(),
            Activity::feeding(start, NeedParams::default(), root.child(0)).unwrap(),
            Activity::sleep(start, false).unwrap(),
        ]
    }

    #[test]
    fn run_respects_total_steps_and_calls_hooks() {
        let config = SimConfig::for_days(start(), 60, 2, 42);
        assert_eq!(config.total_steps, 2 * 1440);
        let mut sim = SimBuilder::new(config.clone(), TallyReporter::default(), TranscriptLog::new())
            .activities(household_day(&config))
            .build()
            .unwrap();

        let mut obs = Counting::default();
        sim.run(&mut obs);
        assert_eq!(obs.starts, 2880);
        assert_eq!(obs.ends, 2880);
        assert_eq!(obs.end, Some(config.end_time()));
        assert_eq!(sim.now(), config.end_time());

        let (tally, log) = sim.into_sinks();
        assert_eq!(tally.idle, minutes(obs.idle));
        for meal in ["Breakfast", "Lunch", "Dinner"] {
            let done = log.for_activity(meal).filter(|e| e.kind == day_activity::EntryKind::Completed).count();
            assert_eq!(done, 2, "{meal} should complete once a day");
        }
        // Roughly every 3h45m over 48h.
        assert!((8..=16).contains(&tally.satisfactions), "{} feedings", tally.satisfactions);
    }

    #[test]
    fn same_seed_same_transcript() {
        let config = SimConfig::for_days(start(), 60, 1, 7);
        let run = || {
            let mut sim = SimBuilder::new(config.clone(), TallyReporter::default(), TranscriptLog::new())
                .activities(household_day(&config))
                .build()
                .unwrap();
            sim.run(&mut NoopObserver);
            sim.into_sinks()
        };
        let (tally_a, log_a) = run();
        let (tally_b, log_b) = run();
        assert_eq!(tally_a, tally_b);
        assert_eq!(log_a.entries(), log_b.entries());
    }

    #[test]
    fn run_ticks_is_incremental() {
        let config = test_config(100);
        let mut sim = SimBuilder::new(config, TallyReporter::default(), NoopTranscript)
            .activities([daily("Breakfast", 5, 8, 0, &[15, 10, 10])])
            .build()
            .unwrap();
        sim.run_ticks(30, &mut NoopObserver);
        assert_eq!(sim.now(), at(7, 30));
        sim.run_ticks(30, &mut NoopObserver);
        assert_eq!(sim.now(), at(8, 0));
        assert_eq!(sim.scheduler.reporter().idle, minutes(60));
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.current_step, 100);
    }
}
