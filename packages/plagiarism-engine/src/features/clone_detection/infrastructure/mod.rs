//! Clone Detection Infrastructure
//!
//! - `segment_matcher`: greedy grow-then-skip line matcher
//! - `overlap_merger`: resolves overlapping segments in the first document

pub mod overlap_merger;
pub mod segment_matcher;

pub use overlap_merger::merge_overlapping_matches;
pub use segment_matcher::{find_exact_matches, LineRun, SegmentMatcher};
