//! CSV routine loader.
//!
//! # CSV format
//!
//! One row per recurring activity.  Empty cells take the kind's default.
//!
//! ```csv
//! name,kind,priority,at,phases,skip_today,follow_on,delay_minutes
//! Breakfast,meal,5,08:00,15;10;10,false,,
//! Lunch,meal,5,12:00,30;15;10,false,,
//! Dinner,meal,5,18:00,45;30;15,false,,
//! Sleep,sleep,5,23:00,420,false,,
//! Laundry,laundry,4,09:00,10,false,Airer,120
//! Airer,drying,4,,10;20,,,
//! ```
//!
//! **`kind`** field:
//!
//! | Value     | Trigger | Required cells          | Defaults                        |
//! |-----------|---------|-------------------------|---------------------------------|
//! | `meal`    | daily   | `at`, three `phases`    | priority 5                      |
//! | `sleep`   | daily   |                         | priority 5, 23:00, 420 min      |
//! | `laundry` | daily   | `follow_on`             | priority 4, 09:00, 10 min, 120 min wash |
//! | `drying`  | causal  |                         | priority 4, 10;20 min           |
//!
//! `phases` is a `;`-separated list of whole minutes.  `follow_on` names
//! another row of the same file, which must be a `drying` row.
//!
//! Need-driven activities (feeding) are not part of the routine file: their
//! distribution parameters and RNG stream come from the run configuration.
//!
//! # Ids
//!
//! Row `i` (0-based, header excluded) becomes `ActivityId(first_id + i)`.
//! Pass the simulation builder's `next_id()` so the ids line up when the
//! returned activities are added in order.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use day_core::{ActivityId, SimTime, TimeOfDay, minutes};
use day_schedule::{CausalTrigger, DailyTrigger, Trigger};

use crate::activity::{
    BEDTIME, DRYING_PHASES, DRYING_PRIORITY, LAUNDRY_MINUTES, LAUNDRY_PRIORITY, LAUNDRY_TIME,
    MEAL_PRIORITY, SLEEP_MINUTES, SLEEP_PRIORITY, WASH_MINUTES,
};
use crate::{Activity, ActivityError, ActivityKind, ActivityResult, PhasePlan};

/// Upper bound for any minute count in a routine file (one year).
const MAX_MINUTES: u64 = 366 * 24 * 60;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoutineRecord {
    name:          String,
    kind:          String,
    priority:      Option<u32>,
    at:            Option<String>,
    phases:        Option<String>,
    skip_today:    Option<bool>,
    follow_on:     Option<String>,
    delay_minutes: Option<u64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a routine from a CSV file.
pub fn load_routine_csv(
    path:     &Path,
    start:    SimTime,
    first_id: ActivityId,
) -> ActivityResult<Vec<Activity>> {
    let file = std::fs::File::open(path).map_err(ActivityError::Io)?;
    load_routine_reader(file, start, first_id)
}

/// Like [`load_routine_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for a routine embedded
/// in a binary.
pub fn load_routine_reader<R: Read>(
    reader:   R,
    start:    SimTime,
    first_id: ActivityId,
) -> ActivityResult<Vec<Activity>> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows: Vec<RoutineRecord> = csv_reader
        .deserialize::<RoutineRecord>()
        .collect::<Result<_, _>>()
        .map_err(|e| ActivityError::Parse(e.to_string()))?;

    // ── Build one Activity per row ────────────────────────────────────────
    rows.iter()
        .enumerate()
        .map(|(i, r)| build_activity(i + 1, r, &rows, start, first_id))
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `row` is 1-based for error messages.
fn build_activity(
    row:      usize,
    r:        &RoutineRecord,
    rows:     &[RoutineRecord],
    start:    SimTime,
    first_id: ActivityId,
) -> ActivityResult<Activity> {
    let skip_today = r.skip_today.unwrap_or(false);
    let daily = |default: Option<TimeOfDay>| -> ActivityResult<Trigger> {
        let at = match (r.at.as_deref(), default) {
            (Some(s), _) => s.parse::<TimeOfDay>().map_err(|e| invalid(row, e.to_string()))?,
            (None, Some(d)) => d,
            (None, None) => return Err(invalid(row, "missing time of day in `at`".into())),
        };
        Ok(DailyTrigger::new(start, at, skip_today).into())
    };
    let plan = |default: &[u64]| -> ActivityResult<PhasePlan> {
        match r.phases.as_deref() {
            Some(s) => parse_phases(row, s),
            None if default.is_empty() => Err(invalid(row, "missing `phases`".into())),
            None => PhasePlan::from_minutes(default)
                .ok_or_else(|| invalid(row, "invalid default phases".into())),
        }
    };

    let (kind, trigger, plan, priority) = match r.kind.to_ascii_lowercase().as_str() {
        "meal" => {
            let plan = plan(&[])?;
            if plan.len() != 3 {
                return Err(invalid(
                    row,
                    format!("a meal needs exactly 3 phases (prepare, eat, clean up), got {}", plan.len()),
                ));
            }
            (ActivityKind::Meal, daily(None)?, plan, MEAL_PRIORITY)
        }
        "sleep" => (ActivityKind::Sleep, daily(Some(BEDTIME))?, plan(&[SLEEP_MINUTES])?, SLEEP_PRIORITY),
        "laundry" => {
            let Some(target) = r.follow_on.as_deref() else {
                return Err(invalid(row, "laundry needs a `follow_on` drying activity".into()));
            };
            let dryer = resolve_follow_on(row, target, rows, first_id)?;
            let wash = match r.delay_minutes {
                Some(m) => checked_minutes(m).ok_or_else(|| {
                    invalid(row, format!("delay_minutes {m} is too large"))
                })?,
                None => minutes(WASH_MINUTES),
            };
            (
                ActivityKind::Laundry { dryer, wash },
                daily(Some(LAUNDRY_TIME))?,
                plan(&[LAUNDRY_MINUTES])?,
                LAUNDRY_PRIORITY,
            )
        }
        "drying" | "airer" => (
            ActivityKind::Drying,
            CausalTrigger::new().into(),
            plan(&DRYING_PHASES)?,
            DRYING_PRIORITY,
        ),
        "feeding" => {
            return Err(invalid(
                row,
                "feeding is need-driven and configured on the command line, not in the routine".into(),
            ));
        }
        _ => return Err(ActivityError::UnknownKind { row, kind: r.kind.clone() }),
    };

    let priority = r.priority.unwrap_or(priority);
    Ok(Activity::new(r.name.clone(), priority, kind, trigger, plan))
}

fn resolve_follow_on(
    row:      usize,
    target:   &str,
    rows:     &[RoutineRecord],
    first_id: ActivityId,
) -> ActivityResult<ActivityId> {
    let unknown = || ActivityError::UnknownFollowOn { row, name: target.to_owned() };
    let index = rows.iter().position(|r| r.name == target).ok_or_else(unknown)?;
    let kind = rows[index].kind.to_ascii_lowercase();
    if kind != "drying" && kind != "airer" {
        return Err(invalid(row, format!("follow-on {target:?} is a {kind}, not a drying activity")));
    }
    let id = first_id.index() + index;
    ActivityId::try_from(id).map_err(|_| invalid(row, format!("activity id {id} out of range")))
}

fn parse_phases(row: usize, s: &str) -> ActivityResult<PhasePlan> {
    let phases = s
        .split(';')
        .map(|p| {
            let m = p.trim().parse::<u64>().map_err(|_| {
                invalid(row, format!("invalid phase length {p:?} in {s:?}: expected whole minutes"))
            })?;
            checked_minutes(m).ok_or_else(|| invalid(row, format!("phase length {m} in {s:?} is too large")))
        })
        .collect::<ActivityResult<Vec<Duration>>>()?;
    PhasePlan::new(phases)
        .ok_or_else(|| invalid(row, format!("phases {s:?} must be non-empty and longer than zero")))
}

/// `m` minutes, or `None` past `MAX_MINUTES`.
fn checked_minutes(m: u64) -> Option<Duration> {
    (m <= MAX_MINUTES).then(|| minutes(m))
}

fn invalid(row: usize, reason: String) -> ActivityError {
    ActivityError::InvalidRow { row, reason }
}
