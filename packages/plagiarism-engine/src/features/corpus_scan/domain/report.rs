//! Scan summary and final report

use super::comparison_result::ComparisonResult;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Corpus-level statistics, computed once at completion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_authors: usize,
    pub total_documents: usize,

    /// Unordered pairs visited, including excluded and skipped ones
    pub total_comparisons: usize,

    /// Pairs that qualified before the result budget was applied
    pub qualifying_results: usize,

    pub threshold_used: f64,

    /// Pairs skipped because both documents share an author
    pub author_excluded_pairs: usize,

    /// Pairs skipped because a document was empty or unreadable
    pub skipped_pairs: usize,

    /// Scan stopped early on request
    pub cancelled: bool,

    pub elapsed_ms: u64,
}

/// Engine output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<ComparisonResult>,
    pub summary: ScanSummary,
}

impl ScanReport {
    pub fn new(results: Vec<ComparisonResult>, summary: ScanSummary) -> Self {
        Self {
            timestamp: Utc::now(),
            results,
            summary,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Exact-match results only
    pub fn exact_matches(&self) -> impl Iterator<Item = &ComparisonResult> {
        self.results.iter().filter(|r| r.is_exact_match)
    }
}
