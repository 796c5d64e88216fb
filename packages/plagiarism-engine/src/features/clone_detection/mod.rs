//! Segment Matching and Similarity Scoring
//!
//! Two signals per document pair:
//! - Exact segments: contiguous runs of lines identical after identifier
//!   normalization, resolved to non-overlapping regions of the first document
//! - Similarity scores: Jaccard over normalized token sets (headline score)
//!   and an LCS ratio over character or line sequences
//!
//! # Architecture
//!
//! ```text
//! domain/          MatchSegment, similarity metrics (pure)
//!    ↑
//! infrastructure/  SegmentMatcher (greedy grow-then-skip), overlap merger
//! ```
//!
//! # Usage
//!
//! ```
//! use plagiarism_engine::features::clone_detection::{find_exact_matches, score};
//!
//! let a = "int a = 1;\nint b = 2;\nint c = a + b;\nreturn c;\n";
//! let b = "int x = 1;\nint y = 2;\nint z = x + y;\nreturn z;\n";
//!
//! let segments = find_exact_matches(a, b, 4);
//! assert_eq!(segments.len(), 1);
//! assert!(segments[0].has_identifier_changes);
//!
//! assert_eq!(score("int var_1", "int var_1"), 1.0);
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{
    char_sequence_similarity, jaccard_similarity, lcs_length, line_sequence_similarity, score,
    sequence_similarity, token_set_similarity, MatchSegment,
};
pub use infrastructure::{find_exact_matches, merge_overlapping_matches, SegmentMatcher};
