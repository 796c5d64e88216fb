//! Overlap merge
//!
//! Segments are ordered by their start in the first document. When two
//! overlap there, the longer one stays; on equal length the earlier one.
//! The result describes disjoint regions of the first document.

use crate::features::clone_detection::domain::MatchSegment;

/// Resolve overlapping segments
pub fn merge_overlapping_matches(mut segments: Vec<MatchSegment>) -> Vec<MatchSegment> {
    if segments.len() < 2 {
        return segments;
    }

    // Stable: equal starts keep discovery order
    segments.sort_by_key(|s| s.line_start1);

    let mut merged: Vec<MatchSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(last) if last.overlaps_in_first(&segment) => {
                if segment.line_count > last.line_count {
                    *last = segment;
                }
            }
            _ => merged.push(segment),
        }
    }
    merged
}
