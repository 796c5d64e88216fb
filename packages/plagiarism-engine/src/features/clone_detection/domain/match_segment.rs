//! Matched segment between two documents

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One contiguous block of lines that matched after identifier normalization
///
/// Line numbers are 1-based and refer to the raw documents. The segment
/// texts are the original lines so a reviewer sees the submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSegment {
    /// Original lines from the first document
    pub segment1: String,

    /// Original lines from the second document
    pub segment2: String,

    pub line_start1: usize,
    pub line_start2: usize,
    pub line_count: usize,

    /// Literal text differs although the normalized lines matched
    pub has_identifier_changes: bool,
}

impl MatchSegment {
    /// Last line (inclusive) in the first document
    pub fn line_end1(&self) -> usize {
        self.line_start1 + self.line_count.saturating_sub(1)
    }

    /// Last line (inclusive) in the second document
    pub fn line_end2(&self) -> usize {
        self.line_start2 + self.line_count.saturating_sub(1)
    }

    /// Line range in the first document
    pub fn line_range1(&self) -> RangeInclusive<usize> {
        self.line_start1..=self.line_end1()
    }

    /// Whether the two segments share any line of the first document
    pub fn overlaps_in_first(&self, other: &MatchSegment) -> bool {
        self.line_start1 <= other.line_end1() && other.line_start1 <= self.line_end1()
    }

    /// Same segment seen from the second document
    pub fn swapped(&self) -> MatchSegment {
        MatchSegment {
            segment1: self.segment2.clone(),
            segment2: self.segment1.clone(),
            line_start1: self.line_start2,
            line_start2: self.line_start1,
            line_count: self.line_count,
            has_identifier_changes: self.has_identifier_changes,
        }
    }
}
