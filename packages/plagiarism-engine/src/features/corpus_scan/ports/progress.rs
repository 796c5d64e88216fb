//! Progress sink port
//!
//! The engine pushes events and does not care whether they end up on a
//! socket, in a log or in a channel.

use crate::features::corpus_scan::domain::{ProgressEvent, ScanEvent};
use parking_lot::Mutex;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Receiver of scan events
///
/// Called from worker threads; implementations must not block for long.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ScanEvent);
}

impl ProgressSink for Sender<ScanEvent> {
    fn emit(&self, event: ScanEvent) {
        if self.send(event).is_err() {
            debug!("progress receiver dropped, event discarded");
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn emit(&self, _event: ScanEvent) {}
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<ScanEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<ScanEvent> {
        self.events.lock().clone()
    }

    /// Progress events only
    pub fn progress(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ScanEvent::Progress(progress) => Some(progress.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last event, normally the terminal one
    pub fn last(&self) -> Option<ScanEvent> {
        self.events.lock().last().cloned()
    }
}

impl ProgressSink for CollectingSink {
    fn emit(&self, event: ScanEvent) {
        self.events.lock().push(event);
    }
}
