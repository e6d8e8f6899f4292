//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as `SimTime`, whole seconds since the Unix epoch (UTC).
//! The driver advances a `SimClock` by a fixed step:
//!
//!   now = start + step_index * step
//!
//! Integer seconds keep schedule arithmetic exact (no floating-point drift):
//! a daily trigger moves forward by exactly 86 400 s and phase boundaries are
//! compared as exact `Duration`s.  Durations use `std::time::Duration`;
//! sub-second parts are ignored when added to a `SimTime`.
//!
//! `chrono` is used only at the edges, to build a `SimTime` from a calendar
//! date and to render one for humans.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{CoreError, CoreResult};

const SECS_PER_DAY: i64 = 86_400;

/// One calendar day.
pub const DAY: Duration = Duration::from_secs(SECS_PER_DAY as u64);

/// `n` minutes as a `Duration`.
#[inline]
pub const fn minutes(n: u64) -> Duration {
    Duration::from_secs(n * 60)
}

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp: seconds since 1970-01-01 00:00 UTC.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub i64);

impl SimTime {
    /// Build a timestamp from a calendar date and a wall-clock time.
    ///
    /// Returns `None` for an impossible date or time.
    pub fn from_ymd_hm(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<SimTime> {
        let dt = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
        Some(SimTime(dt.and_utc().timestamp()))
    }

    /// Parse `"YYYY-MM-DD HH:MM"` (24-hour clock).
    pub fn parse(s: &str) -> CoreResult<SimTime> {
        NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
            .map(|dt| SimTime(dt.and_utc().timestamp()))
            .map_err(|e| CoreError::Parse(format!("invalid start time {s:?}: {e}")))
    }

    /// Midnight at the start of this timestamp's day.
    #[inline]
    pub fn day_start(self) -> SimTime {
        SimTime(self.day_index() * SECS_PER_DAY)
    }

    /// Whole days since the epoch.  Two timestamps share a calendar day iff
    /// their indices are equal.
    #[inline]
    pub fn day_index(self) -> i64 {
        self.0.div_euclid(SECS_PER_DAY)
    }

    /// The timestamp at `at` on this timestamp's day.
    #[inline]
    pub fn at(self, at: TimeOfDay) -> SimTime {
        self.day_start() + at.since_midnight()
    }

    /// Time elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: SimTime) -> Duration {
        Duration::from_secs((self.0 - earlier.0).max(0) as u64)
    }

    /// Calendar representation (UTC).
    pub fn to_datetime(self) -> NaiveDateTime {
        DateTime::from_timestamp(self.0, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// Calendar date (UTC).
    pub fn date(self) -> NaiveDate {
        self.to_datetime().date()
    }
}

impl Add<Duration> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: Duration) -> SimTime {
        SimTime(self.0 + rhs.as_secs() as i64)
    }
}

impl AddAssign<Duration> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for SimTime {
    type Output = SimTime;
    #[inline]
    fn sub(self, rhs: Duration) -> SimTime {
        SimTime(self.0 - rhs.as_secs() as i64)
    }
}

impl fmt::Display for SimTime {
    /// `2023-04-02 07:00 AM`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_datetime().format("%Y-%m-%d %I:%M %p"))
    }
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A wall-clock time within a day, minute resolution.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    hour:   u8,
    minute: u8,
}

impl TimeOfDay {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    pub const fn new(hour: u8, minute: u8) -> Option<TimeOfDay> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn since_midnight(self) -> Duration {
        minutes(self.hour as u64 * 60 + self.minute as u64)
    }
}

impl FromStr for TimeOfDay {
    type Err = CoreError;

    /// Parse `"HH:MM"`.
    fn from_str(s: &str) -> CoreResult<TimeOfDay> {
        let bad = || CoreError::Parse(format!("invalid time of day {s:?}: expected HH:MM"));
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let hour: u8 = h.parse().map_err(|_| bad())?;
        let minute: u8 = m.parse().map_err(|_| bad())?;
        TimeOfDay::new(hour, minute).ok_or_else(bad)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Supplies the `(now, step)` pairs the scheduler is driven with.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Timestamp of step 0.
    pub start: SimTime,
    /// Fixed step duration.
    pub step: Duration,
    /// Number of steps taken so far — advanced by `SimClock::advance()`.
    pub current_step: u64,
}

impl SimClock {
    pub fn new(start: SimTime, step: Duration) -> Self {
        Self { start, step, current_step: 0 }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step += 1;
    }

    /// Simulated time elapsed since step 0.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(self.step.as_secs() * self.current_step)
    }

    /// The current timestamp.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.start + self.elapsed()
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically assembled from command-line flags by the application crate and
/// passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Timestamp of step 0.
    pub start: SimTime,

    /// Seconds per step.  Phase durations need not be multiples of it, but
    /// the transcript is most readable when they are.  Default: 60.
    pub step_secs: u32,

    /// Total steps to simulate.  Two days at 1-minute steps: 2 * 1440.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Configuration covering `days` whole days from `start`.
    pub fn for_days(start: SimTime, step_secs: u32, days: u64, seed: u64) -> Self {
        let total_steps = (days * DAY.as_secs()).div_ceil(step_secs.max(1) as u64);
        Self { start, step_secs, total_steps, seed }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        Duration::from_secs(self.step_secs as u64)
    }

    /// The timestamp at which the simulation ends (exclusive upper bound).
    pub fn end_time(&self) -> SimTime {
        self.start + Duration::from_secs(self.step_secs as u64 * self.total_steps)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start, self.step())
    }
}
