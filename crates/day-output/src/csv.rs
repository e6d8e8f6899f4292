//! CSV output backend.
//!
//! Creates up to two files in the configured output directory:
//! - `transcript.csv` ([`CsvTranscript`])
//! - `daily_summaries.csv` ([`CsvSummaryWriter`])

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::warn;

use day_activity::{Transcript, TranscriptEntry};

use crate::row::hh_mm;
use crate::writer::SummaryWriter;
use crate::{DailySummary, OutputError, OutputResult};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

// ── Transcript ────────────────────────────────────────────────────────────────

/// Writes every transcript entry as one CSV row.
///
/// `Transcript::record` has no return value, so write errors are stored
/// and retrieved with [`take_error`][Self::take_error].
pub struct CsvTranscript<W: Write> {
    writer:     Writer<W>,
    finished:   bool,
    last_error: Option<OutputError>,
}

impl CsvTranscript<File> {
    /// Create `transcript.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join("transcript.csv"))?)
    }
}

impl<W: Write> CsvTranscript<W> {
    /// Write the header row to `out`.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(["time", "unix_time_secs", "activity", "kind", "text"])?;
        Ok(Self { writer, finished: false, last_error: None })
    }

    /// Take the first stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the underlying writer.
    ///
    /// Idempotent: safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and unwrap the inner writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }

    fn write_entry(&mut self, entry: &TranscriptEntry) -> OutputResult<()> {
        self.writer.write_record([
            entry.at.to_datetime().format(TIME_FORMAT).to_string(),
            entry.at.0.to_string(),
            entry.activity.clone(),
            entry.kind.as_str().to_owned(),
            entry.text.clone(),
        ])?;
        Ok(())
    }
}

impl<W: Write> Transcript for CsvTranscript<W> {
    fn record(&mut self, entry: &TranscriptEntry) {
        if let Err(e) = self.write_entry(entry) {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "CSV transcript write failed");
                self.last_error = Some(e);
            }
        }
    }
}

// ── Summaries ─────────────────────────────────────────────────────────────────

/// Writes one row per finished day.
pub struct CsvSummaryWriter<W: Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvSummaryWriter<File> {
    /// Create `daily_summaries.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join("daily_summaries.csv"))?)
    }
}

impl<W: Write> CsvSummaryWriter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(out);
        writer.write_record(["date", "feedings", "interventions", "free_time_minutes", "free_time"])?;
        Ok(Self { writer, finished: false })
    }

    /// Flush and unwrap the inner writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> SummaryWriter for CsvSummaryWriter<W> {
    fn write_summary(&mut self, summary: &DailySummary) -> OutputResult<()> {
        self.writer.write_record(&[
            summary.date.to_string(),
            summary.feedings.to_string(),
            summary.interventions.to_string(),
            (summary.free_time.as_secs() / 60).to_string(),
            hh_mm(summary.free_time),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
