//! baby-day — two days in the life of a new parent.
//!
//! Meals, sleep and laundry come from a routine CSV (embedded below, or
//! `--routine <path>`); milk feedings arrive at random intervals and
//! interrupt whatever is going on.  The transcript goes to stdout together
//! with a summary block at the end of every day; `--out <dir>` also writes
//! `transcript.csv` and `daily_summaries.csv`.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=day_sim=debug`).

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use day_activity::{Activity, TranscriptExt, load_routine_csv, load_routine_reader};
use day_core::{SimConfig, SimRng, SimTime};
use day_output::{
    ConsoleSummaryWriter, ConsoleTranscript, CsvSummaryWriter, CsvTranscript, DailyReporter,
    SummaryObserver,
};
use day_schedule::NeedParams;
use day_sim::SimBuilder;

// ── Routine CSV ───────────────────────────────────────────────────────────────

// Laundry at 09:00 arms the airer two hours after the machine is loaded.
const ROUTINE_CSV: &str = "\
name,kind,priority,at,phases,skip_today,follow_on,delay_minutes\n\
Breakfast,meal,5,08:00,15;10;10,false,,\n\
Lunch,meal,5,12:00,30;15;10,false,,\n\
Dinner,meal,5,18:00,45;30;15,false,,\n\
Sleep,sleep,5,23:00,420,false,,\n\
Laundry,laundry,4,09:00,10,false,Airer,120\n\
Airer,drying,4,,10;20,,,\n\
";

// RNG stream for the feeding need.
const FEEDING_STREAM: u64 = 0;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start of the run, `YYYY-MM-DD HH:MM`
    #[arg(long, default_value = "2023-04-02 07:00")]
    start: String,

    /// Number of days to simulate
    #[arg(long, default_value_t = 2)]
    days: u64,

    /// Minutes per tick
    #[arg(long, default_value_t = 1)]
    step_minutes: u32,

    /// Master RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Routine CSV to use instead of the built-in one
    #[arg(long)]
    routine: Option<PathBuf>,

    /// Directory for transcript.csv and daily_summaries.csv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Wait for Enter after every transcript line
    #[arg(long)]
    step_through: bool,

    /// Mean minutes between feedings
    #[arg(long, default_value_t = 180.0)]
    feeding_mean: f64,

    /// Standard deviation of the feeding interval, in minutes
    #[arg(long, default_value_t = 30.0)]
    feeding_std: f64,

    /// Leave milk feeding out of the run
    #[arg(long)]
    no_feeding: bool,
}

/// `--step-minutes` in seconds; rejects zero and values past `u32` seconds.
fn step_secs(step_minutes: u32) -> Result<u32> {
    if step_minutes == 0 {
        bail!("--step-minutes must be at least 1");
    }
    let Some(secs) = step_minutes.checked_mul(60) else {
        bail!("--step-minutes {step_minutes} is too large");
    };
    Ok(secs)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let step_secs = step_secs(args.step_minutes)?;

    // 1. Configuration.
    let start = SimTime::parse(&args.start)?;
    let config = SimConfig::for_days(start, step_secs, args.days, args.seed);
    let mut root_rng = SimRng::new(config.seed);
    info!(%start, end = %config.end_time(), step_secs, seed = config.seed, "configured");

    // 2. Transcript sinks.
    let mut console = ConsoleTranscript::stdout(args.step_through);
    console.message(start, "Starting a life with a baby...");
    let csv_transcript = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(CsvTranscript::new(dir)?)
        }
        None => None,
    };

    // 3. Routine and feeding.
    let mut builder = SimBuilder::new(config, DailyReporter::new(), console.and(csv_transcript));
    let routine = match &args.routine {
        Some(path) => load_routine_csv(path, start, builder.next_id())
            .with_context(|| format!("loading routine {}", path.display()))?,
        None => load_routine_reader(Cursor::new(ROUTINE_CSV), start, builder.next_id())?,
    };
    info!(activities = routine.len(), "routine loaded");
    builder = builder.activities(routine);

    if !args.no_feeding {
        let params = NeedParams { mean_minutes: args.feeding_mean, std_dev_minutes: args.feeding_std };
        let rng = root_rng.child(FEEDING_STREAM);
        builder.add_activity(Activity::feeding(start, params, rng)?);
    }

    let mut sim = builder.build()?;

    // 4. Summary sinks.
    let csv_summaries = match &args.out {
        Some(dir) => Some(CsvSummaryWriter::new(dir)?),
        None => None,
    };
    let mut obs = SummaryObserver::new((ConsoleSummaryWriter::stdout(), csv_summaries));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs);
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, days = obs.summaries().len(), "run finished");

    // 6. Flush and report output errors.
    if let Some(e) = obs.take_error() {
        warn!(error = %e, "summary output failed");
    }
    let (_reporter, transcript) = sim.into_sinks();
    let (mut console, csv_transcript) = transcript.into_inner();
    if let Some(e) = console.take_error() {
        warn!(error = %e, "console output failed");
    }
    if let Some(mut csv) = csv_transcript {
        csv.finish()?;
        if let Some(e) = csv.take_error() {
            bail!("writing transcript.csv: {e}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_minutes_validated() {
        assert_eq!(step_secs(1).unwrap(), 60);
        assert_eq!(step_secs(u32::MAX / 60).unwrap(), u32::MAX / 60 * 60);
        assert!(step_secs(0).is_err());
        assert!(step_secs(u32::MAX / 60 + 1).is_err());
    }

    #[test]
    fn built_in_routine_loads() {
        let start = SimTime::parse("2023-04-02 07:00").unwrap();
        let routine = load_routine_reader(Cursor::new(ROUTINE_CSV), start, day_core::ActivityId(0)).unwrap();
        assert_eq!(routine.len(), 6);
    }
}
