//! Progress and terminal events
//!
//! Transient: emitted to a [`ProgressSink`](crate::features::corpus_scan::ports::ProgressSink)
//! and never retained by the engine.

use super::comparison_result::ComparisonResult;
use super::report::ScanSummary;
use super::stage::ScanStage;
use serde::{Deserialize, Serialize};

/// Cumulative scan progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: ScanStage,
    pub comparisons_done: usize,
    pub comparisons_total: usize,

    /// `author/file vs author/file` of the pair last evaluated
    pub current_pair: Option<String>,
}

impl ProgressEvent {
    /// Stage-transition event
    pub fn stage(stage: ScanStage, comparisons_done: usize, comparisons_total: usize) -> Self {
        Self {
            stage,
            comparisons_done,
            comparisons_total,
            current_pair: None,
        }
    }
}

/// Event stream element
///
/// Wire form is tagged by `status`: `progress`, `complete` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScanEvent {
    Progress(ProgressEvent),
    Complete {
        results: Vec<ComparisonResult>,
        summary: ScanSummary,
    },
    Error {
        message: String,
    },
}

impl ScanEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ScanEvent::Progress(_))
    }
}
