//! `ReadyQueue` — priority-ordered set of admitted activities.
//!
//! # Ordering
//!
//! Every admission is stamped with a strictly increasing sequence number.
//! Entries are keyed by `(priority, sequence)` and compared lexicographically,
//! so:
//!
//! - a lower priority number always comes first;
//! - among equal priorities the earlier admission comes first (FIFO);
//! - no two keys are equal, so the head is always unique.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log n) admission, O(log n) head lookup and O(log n)
//! removal where n is the number of admitted activities (a handful in a
//! daily routine).  The head stays in place while it runs and is removed
//! only when it completes; preempted entries keep their key and therefore
//! their place in line.

use std::collections::BTreeMap;

use day_core::ActivityId;

/// Ordering key of a ready-queue entry.
///
/// Field order matters: the derived `Ord` compares `priority` first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct QueueKey {
    /// Lower value = more urgent.
    pub priority: u32,
    /// Admission sequence number.
    pub seq:      u64,
}

/// Ready/running/paused activities ordered by [`QueueKey`].
#[derive(Default, Debug)]
pub struct ReadyQueue {
    inner:    BTreeMap<QueueKey, ActivityId>,
    next_seq: u64,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `activity` with `priority`, stamping the next sequence number.
    pub fn admit(&mut self, priority: u32, activity: ActivityId) -> QueueKey {
        let key = QueueKey { priority, seq: self.next_seq };
        self.next_seq += 1;
        self.inner.insert(key, activity);
        key
    }

    /// The minimum entry, or `None` if empty.
    pub fn head(&self) -> Option<(QueueKey, ActivityId)> {
        self.inner.first_key_value().map(|(k, v)| (*k, *v))
    }

    /// Remove and return the minimum entry.
    pub fn pop_head(&mut self) -> Option<(QueueKey, ActivityId)> {
        self.inner.pop_first()
    }

    /// `true` if `activity` is currently admitted.
    pub fn contains(&self, activity: ActivityId) -> bool {
        self.inner.values().any(|&a| a == activity)
    }

    /// Entries in queue order.
    pub fn iter(&self) -> impl Iterator<Item = (QueueKey, ActivityId)> + '_ {
        self.inner.iter().map(|(k, v)| (*k, *v))
    }

    /// The sequence number the next admission will receive.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
