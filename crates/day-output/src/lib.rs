//! `day-output` — reporting and transcript backends for the day-routine
//! scheduler.
//!
//! | Backend  | Transcript                 | Daily summary                              |
//! |----------|----------------------------|--------------------------------------------|
//! | Console  | [`ConsoleTranscript`]      | [`ConsoleSummaryWriter`]                   |
//! | CSV      | [`CsvTranscript`] → `transcript.csv` | [`CsvSummaryWriter`] → `daily_summaries.csv` |
//!
//! Transcripts implement `day_activity::Transcript` and are handed to the
//! simulation builder; combine several with `TranscriptExt::and`.
//! Summary writers implement [`SummaryWriter`] and are driven by
//! [`SummaryObserver`], which implements `day_sim::SimObserver` over the
//! [`DailyReporter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use day_output::{ConsoleSummaryWriter, ConsoleTranscript, DailyReporter, SummaryObserver};
//!
//! let mut sim = SimBuilder::new(config, DailyReporter::new(), ConsoleTranscript::stdout(false))
//!     .activities(routine)
//!     .build()?;
//! let mut obs = SummaryObserver::new(ConsoleSummaryWriter::stdout());
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod reporter;
pub mod row;
pub mod writer;


pub use console::{ConsoleSummaryWriter, ConsoleTranscript};
pub use csv::{CsvSummaryWriter, CsvTranscript};
pub use error::{OutputError, OutputResult};
pub use observer::SummaryObserver;
pub use reporter::DailyReporter;
pub use row::{DailySummary, hh_mm};
pub use writer::SummaryWriter;
