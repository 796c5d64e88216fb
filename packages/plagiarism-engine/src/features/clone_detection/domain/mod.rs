//! Clone Detection Domain
//!
//! Segment model and similarity metrics. No tokenizer or I/O dependencies.

pub mod match_segment;
pub mod similarity;

pub use match_segment::MatchSegment;
pub use similarity::{
    char_sequence_similarity, jaccard_similarity, lcs_length, line_sequence_similarity, score,
    sequence_similarity, token_set_similarity,
};
