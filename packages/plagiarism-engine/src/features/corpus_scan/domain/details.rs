//! Reviewer drill-down for one pair

use crate::features::clone_detection::MatchSegment;
use serde::{Deserialize, Serialize};

/// Everything the engine knows about one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDetails {
    pub user1: String,
    pub file1: String,
    pub user2: String,
    pub file2: String,

    pub original_code1: String,
    pub original_code2: String,
    pub normalized_code1: String,
    pub normalized_code2: String,

    /// Jaccard over normalized tokens (the headline score)
    pub token_similarity: f64,

    /// LCS ratio over normalized lines
    pub sequence_similarity: f64,

    /// Distinct normalized lines present in both documents
    pub line_matches: usize,

    /// Non-empty normalized lines of the longer document
    pub total_lines: usize,

    pub segments: Vec<MatchSegment>,
}

impl ComparisonDetails {
    /// Share of lines found in both documents
    pub fn line_match_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.line_matches as f64 / self.total_lines as f64
        }
    }
}
