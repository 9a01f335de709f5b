//! Cooperative cancellation for scan workers.
//!
//! Cancellation is generation-based: the tracker holds the generation of the
//! scan that is currently allowed to run, and each worker carries a token
//! stamped with the generation it was started under. Advancing the tracker —
//! on `stop()` or when a new search supersedes the old one — makes every
//! outstanding token stale in a single atomic store, with no per-scan flag to
//! reset or hand back.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Tracks the generation of the one scan allowed to be in flight.
#[derive(Debug, Default)]
pub(crate) struct ScanTracker {
    active: Arc<AtomicU64>,
}

impl ScanTracker {
    /// Start a new scan generation, cancelling any in-flight scan, and return
    /// the token the new worker should poll.
    pub(crate) fn begin(&self) -> ScanToken {
        let generation = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        ScanToken {
            active: Arc::clone(&self.active),
            generation,
        }
    }

    /// Cancel the in-flight scan (if any) without starting a new one.
    pub(crate) fn retire(&self) {
        self.active.fetch_add(1, Ordering::SeqCst);
    }
}

/// A worker's handle for polling whether its scan is still the active one.
///
/// Checked once per page, before the provider call — cancellation never
/// interrupts an in-progress page search.
#[derive(Debug, Clone)]
pub(crate) struct ScanToken {
    active: Arc<AtomicU64>,
    generation: u64,
}

impl ScanToken {
    /// The generation this token's scan was started under. Stamped onto
    /// every event the worker emits so the foreground can drop stale ones.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// `true` once a newer scan (or a stop) has superseded this one.
    pub(crate) fn is_cancelled(&self) -> bool {
        self.active.load(Ordering::SeqCst) != self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_live() {
        let tracker = ScanTracker::default();
        let token = tracker.begin();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn begin_supersedes_previous_token() {
        let tracker = ScanTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
    }

    #[test]
    fn retire_cancels_without_replacement() {
        let tracker = ScanTracker::default();
        let token = tracker.begin();
        tracker.retire();
        assert!(token.is_cancelled());
    }

    #[test]
    fn generations_are_distinct() {
        let tracker = ScanTracker::default();
        assert_ne!(tracker.begin().generation(), tracker.begin().generation());
    }
}
