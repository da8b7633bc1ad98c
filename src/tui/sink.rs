//! Fetch-outcome sink: channels worker-thread results to the TUI event loop.

use std::sync::Mutex;

use crate::search::FetchOutcome;

/// Collects sequence-tagged fetch outcomes for the event loop to drain
/// (thread-safe).
pub struct FetchSink {
    pending: Mutex<Vec<FetchOutcome>>,
}

impl FetchSink {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Post an outcome from a worker thread.
    pub fn push(&self, outcome: FetchOutcome) {
        self.pending.lock().unwrap().push(outcome);
    }

    /// Drain all pending outcomes for the controller to apply.
    pub fn drain(&self) -> Vec<FetchOutcome> {
        let mut pending = self.pending.lock().unwrap();
        std::mem::take(&mut *pending)
    }
}

impl Default for FetchSink {
    fn default() -> Self {
        Self::new()
    }
}
