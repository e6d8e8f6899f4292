//! `Transcript` — sink for human-readable activity notices.
//!
//! Activities describe what they are doing as they progress: starting,
//! resuming, entering a phase, being suspended and completing.  Each notice
//! is a [`TranscriptEntry`] handed to a `Transcript` implementation.  The
//! core never formats or prints anything itself; backends (console, CSV)
//! live in `day-output`.
//!
//! Sinks are designed to be *composable*: combine them with
//! [`TranscriptExt::and`] to feed the same entries to several backends.

use std::fmt;

use day_core::SimTime;

// ── Entry ─────────────────────────────────────────────────────────────────────

/// What kind of notice an entry is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EntryKind {
    /// First step of a run.
    Started,
    /// First step after a preemption.
    Resumed,
    /// An internal phase boundary was crossed.
    Phase,
    /// The activity was preempted.
    Suspended,
    /// The total duration was reached.
    Completed,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Started => "started",
            EntryKind::Resumed => "resumed",
            EntryKind::Phase => "phase",
            EntryKind::Suspended => "suspended",
            EntryKind::Completed => "completed",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamped notice.
///
/// `at` is the tick start for started/resumed/suspended notices and the tick
/// end (`now + step`) for phase and completion notices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TranscriptEntry {
    pub at:       SimTime,
    pub activity: String,
    pub kind:     EntryKind,
    pub text:     String,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Receives every notice produced while the schedule runs.
///
/// # Contract
///
/// - Called synchronously from inside the tick; must not call back into
///   the scheduler.
/// - Has no return value: a backend that can fail keeps its own error
///   state (see `day-output`).
pub trait Transcript {
    fn record(&mut self, entry: &TranscriptEntry);
}

impl<T: Transcript + ?Sized> Transcript for &mut T {
    #[inline]
    fn record(&mut self, entry: &TranscriptEntry) {
        (**self).record(entry);
    }
}

impl<T: Transcript + ?Sized> Transcript for Box<T> {
    #[inline]
    fn record(&mut self, entry: &TranscriptEntry) {
        (**self).record(entry);
    }
}

/// `None` discards, so an optional sink can be wired in unconditionally.
impl<T: Transcript> Transcript for Option<T> {
    #[inline]
    fn record(&mut self, entry: &TranscriptEntry) {
        if let Some(inner) = self {
            inner.record(entry);
        }
    }
}

// ── No-op ─────────────────────────────────────────────────────────────────────

/// A transcript that discards every entry.
pub struct NoopTranscript;

impl Transcript for NoopTranscript {
    #[inline]
    fn record(&mut self, _entry: &TranscriptEntry) {}
}

// ── In-memory log ─────────────────────────────────────────────────────────────

/// Keeps every entry in memory.  Mostly useful in tests.
#[derive(Default, Debug, Clone)]
pub struct TranscriptLog {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Entries of one kind, in recording order.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &TranscriptEntry> + '_ {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Entries for one activity, in recording order.
    pub fn for_activity<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TranscriptEntry> + 'a {
        self.entries.iter().filter(move |e| e.activity == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Transcript for TranscriptLog {
    fn record(&mut self, entry: &TranscriptEntry) {
        self.entries.push(entry.clone());
    }
}

// ── Tee ───────────────────────────────────────────────────────────────────────

/// Forwards every entry to two sinks, first `A` then `B`.
///
/// Construct with `sink_a.and(sink_b)`.
pub struct Tee<A: Transcript, B: Transcript> {
    first:  A,
    second: B,
}

impl<A: Transcript, B: Transcript> Tee<A, B> {
    /// Split back into the two sinks.
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A: Transcript, B: Transcript> Transcript for Tee<A, B> {
    fn record(&mut self, entry: &TranscriptEntry) {
        self.first.record(entry);
        self.second.record(entry);
    }
}

/// Extension trait that adds `.and(other)` to any `Transcript`.
pub trait TranscriptExt: Transcript + Sized {
    fn and<B: Transcript>(self, other: B) -> Tee<Self, B> {
        Tee { first: self, second: other }
    }
}

impl<T: Transcript + Sized> TranscriptExt for T {}
