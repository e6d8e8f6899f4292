//! Unit tests for day-core primitives.

#[cfg(test)]
mod ids {
    use crate::ActivityId;

    #[test]
    fn index_roundtrip() {
        let id = ActivityId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(ActivityId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn too_large_index_rejected() {
        assert!(ActivityId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(ActivityId::INVALID.0, u16::MAX);
        assert_eq!(ActivityId::default(), ActivityId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ActivityId(7).to_string(), "ActivityId(7)");
    }
}

#[cfg(test)]
mod time {
    use std::time::Duration;

    use crate::{DAY, SimClock, SimConfig, SimTime, TimeOfDay, minutes};

    fn start() -> SimTime {
        SimTime::from_ymd_hm(2023, 4, 2, 7, 0).unwrap()
    }

    #[test]
    fn from_ymd_hm_rejects_impossible_dates() {
        assert!(SimTime::from_ymd_hm(2023, 2, 30, 7, 0).is_none());
        assert!(SimTime::from_ymd_hm(2023, 4, 2, 24, 0).is_none());
    }

    #[test]
    fn parse_matches_constructor() {
        assert_eq!(SimTime::parse("2023-04-02 07:00").unwrap(), start());
        assert!(SimTime::parse("2023-04-02T07:00").is_err());
    }

    #[test]
    fn display_uses_twelve_hour_clock() {
        assert_eq!(start().to_string(), "2023-04-02 07:00 AM");
        let evening = SimTime::from_ymd_hm(2023, 4, 2, 23, 5).unwrap();
        assert_eq!(evening.to_string(), "2023-04-02 11:05 PM");
    }

    #[test]
    fn day_start_and_at() {
        let t = start() + minutes(95);
        assert_eq!(t.day_start(), SimTime::from_ymd_hm(2023, 4, 2, 0, 0).unwrap());
        let eight = TimeOfDay::new(8, 0).unwrap();
        assert_eq!(t.at(eight), SimTime::from_ymd_hm(2023, 4, 2, 8, 0).unwrap());
    }

    #[test]
    fn day_index_changes_at_midnight() {
        let before = SimTime::from_ymd_hm(2023, 4, 2, 23, 59).unwrap();
        let after = before + minutes(1);
        assert_eq!(after.day_index(), before.day_index() + 1);
        assert_eq!(after.date().to_string(), "2023-04-03");
    }

    #[test]
    fn since_saturates() {
        let t = start();
        assert_eq!((t + minutes(5)).since(t), minutes(5));
        assert_eq!(t.since(t + minutes(5)), Duration::ZERO);
    }

    #[test]
    fn add_day_is_exact() {
        let mut t = start();
        t += DAY;
        assert_eq!(t, SimTime::from_ymd_hm(2023, 4, 3, 7, 0).unwrap());
    }

    #[test]
    fn sub_steps_back() {
        let t = start() + DAY;
        assert_eq!(t - minutes(1), SimTime::from_ymd_hm(2023, 4, 3, 6, 59).unwrap());
        assert_eq!(t - DAY, start());
        assert_eq!((t - minutes(30)).since(start()), DAY - minutes(30));
    }

    #[test]
    fn time_of_day_parse() {
        let t: TimeOfDay = "08:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 30));
        assert_eq!(t.since_midnight(), minutes(510));
        assert_eq!(t.to_string(), "08:30");
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("8h30".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn clock_advances_by_step() {
        let mut clock = SimClock::new(start(), minutes(1));
        assert_eq!(clock.now(), start());
        clock.advance();
        clock.advance();
        assert_eq!(clock.now(), start() + minutes(2));
        assert_eq!(clock.elapsed(), minutes(2));
    }

    #[test]
    fn config_for_days() {
        let cfg = SimConfig::for_days(start(), 60, 2, 42);
        assert_eq!(cfg.total_steps, 2 * 1440);
        assert_eq!(cfg.step(), minutes(1));
        assert_eq!(cfg.end_time(), start() + 2 * DAY);
        assert_eq!(cfg.make_clock().now(), start());
    }
}

#[cfg(test)]
mod rng {
    use rand::distributions::Standard;

    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.sample(&Standard);
            let b: f64 = r2.sample(&Standard);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_differ_by_stream() {
        let mut root = SimRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.sample(&Standard);
        let b: u64 = c1.sample(&Standard);
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn children_reproducible() {
        let mut a = SimRng::new(9).child(3);
        let mut b = SimRng::new(9).child(3);
        let x: u64 = a.sample(&Standard);
        let y: u64 = b.sample(&Standard);
        assert_eq!(x, y);
    }
}
