//! Console backend.
//!
//! [`ConsoleTranscript`] prints one line per transcript entry:
//!
//! ```text
//! 2023-04-02 08:00 AM | Breakfast | Start preparing. Takes 15 min.
//! ```
//!
//! With step-through enabled it waits for a line of input (Enter) after
//! every entry except "suspended" ones, so a run can be followed one notice
//! at a time.  [`ConsoleSummaryWriter`] prints the daily summary block.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use tracing::warn;

use day_activity::{EntryKind, Transcript, TranscriptEntry};
use day_core::SimTime;

use crate::writer::SummaryWriter;
use crate::{DailySummary, OutputResult};

// ── Transcript ────────────────────────────────────────────────────────────────

/// Prints transcript entries to `W`, optionally pausing on `I`.
pub struct ConsoleTranscript<W: Write, I: BufRead> {
    out:        W,
    input:      Option<I>,
    last_error: Option<io::Error>,
}

impl ConsoleTranscript<Stdout, StdinLock<'static>> {
    /// Print to stdout; pause on stdin when `step_through` is set.
    pub fn stdout(step_through: bool) -> Self {
        let input = step_through.then(|| io::stdin().lock());
        Self::new(io::stdout(), input)
    }
}

impl<W: Write, I: BufRead> ConsoleTranscript<W, I> {
    /// `input: None` disables step-through.
    pub fn new(out: W, input: Option<I>) -> Self {
        Self { out, input, last_error: None }
    }

    /// Print a free-standing line not tied to an activity.
    pub fn message(&mut self, at: SimTime, text: &str) {
        let result = self.emit(&format!("{at} | {text}"), true);
        self.store_err(result);
    }

    /// Take the first stored I/O error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the output sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str, pause: bool) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        if let Some(input) = self.input.as_mut().filter(|_| pause) {
            let mut discard = String::new();
            input.read_line(&mut discard)?;
        }
        Ok(())
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "console transcript write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write, I: BufRead> Transcript for ConsoleTranscript<W, I> {
    fn record(&mut self, entry: &TranscriptEntry) {
        let line = format!("{} | {} | {}", entry.at, entry.activity, entry.text);
        let result = self.emit(&line, entry.kind != EntryKind::Suspended);
        self.store_err(result);
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Prints the daily summary block to `W`.
pub struct ConsoleSummaryWriter<W: Write> {
    out: W,
}

impl ConsoleSummaryWriter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSummaryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SummaryWriter for ConsoleSummaryWriter<W> {
    fn write_summary(&mut self, summary: &DailySummary) -> OutputResult<()> {
        writeln!(self.out, "{summary}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
