//! Comparison result for one document pair

use crate::features::corpus_scan::ports::Prediction;
use crate::features::clone_detection::MatchSegment;
use crate::shared::models::Document;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;

/// One qualifying pair
///
/// Invariant: `is_exact_match` implies `similarity == 1.0`. Each unordered
/// pair appears at most once, with `user1/file1` the earlier document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub user1: String,
    pub file1: String,
    pub user2: String,
    pub file2: String,

    /// Score in [0.0, 1.0], four decimals on the wire
    #[serde(serialize_with = "round4")]
    pub similarity: f64,

    pub is_exact_match: bool,

    pub segments: Vec<MatchSegment>,

    /// Original code of each segment in the first document
    pub similar_segments: Vec<String>,

    /// Full raw texts, present only when segments were extracted
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_code1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_code2: Option<String>,

    /// Auxiliary classifier opinion
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prediction: Option<Prediction>,

    /// Position of the pair in scan order
    #[serde(skip)]
    pub pair_index: usize,
}

fn round4<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10_000.0).round() / 10_000.0)
}

impl ComparisonResult {
    /// Exact-match finding (similarity 1.0)
    pub fn exact(a: &Document, b: &Document, segments: Vec<MatchSegment>, pair_index: usize) -> Self {
        Self::build(a, b, 1.0, true, segments, pair_index)
    }

    /// Token-similarity finding
    pub fn scored(
        a: &Document,
        b: &Document,
        similarity: f64,
        segments: Vec<MatchSegment>,
        pair_index: usize,
    ) -> Self {
        Self::build(a, b, similarity.clamp(0.0, 1.0), false, segments, pair_index)
    }

    fn build(
        a: &Document,
        b: &Document,
        similarity: f64,
        is_exact_match: bool,
        segments: Vec<MatchSegment>,
        pair_index: usize,
    ) -> Self {
        let (original_code1, original_code2) = if segments.is_empty() {
            (None, None)
        } else {
            (Some(a.raw_text.clone()), Some(b.raw_text.clone()))
        };

        Self {
            user1: a.author.clone(),
            file1: a.filename.clone(),
            user2: b.author.clone(),
            file2: b.filename.clone(),
            similarity,
            is_exact_match,
            similar_segments: segments.iter().map(|s| s.segment1.clone()).collect(),
            segments,
            original_code1,
            original_code2,
            prediction: None,
            pair_index,
        }
    }

    /// Attach a classifier prediction
    pub fn with_prediction(mut self, prediction: Option<Prediction>) -> Self {
        self.prediction = prediction;
        self
    }

    /// Ranking order: exact first, then similarity, then segment count,
    /// all descending. Equal keys compare equal.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .is_exact_match
            .cmp(&self.is_exact_match)
            .then_with(|| other.similarity.total_cmp(&self.similarity))
            .then_with(|| other.segments.len().cmp(&self.segments.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(author: &str) -> Document {
        Document::new(author, "main.c", "int x = 1;\n")
    }

    fn segment() -> MatchSegment {
        MatchSegment {
            segment1: "a".into(),
            segment2: "b".into(),
            line_start1: 1,
            line_start2: 1,
            line_count: 4,
            has_identifier_changes: true,
        }
    }

    #[test]
    fn test_exact_has_full_similarity() {
        let r = ComparisonResult::exact(&doc("a"), &doc("b"), vec![segment()], 0);
        assert!(r.is_exact_match);
        assert_eq!(r.similarity, 1.0);
        assert_eq!(r.similar_segments, vec!["a".to_string()]);
        assert!(r.original_code1.is_some());
    }

    #[test]
    fn test_scored_without_segments_omits_code() {
        let r = ComparisonResult::scored(&doc("a"), &doc("b"), 0.8, Vec::new(), 3);
        assert!(!r.is_exact_match);
        assert!(r.original_code1.is_none());
        assert_eq!(r.pair_index, 3);
    }

    #[test]
    fn test_similarity_rounded_on_wire() {
        let r = ComparisonResult::scored(&doc("a"), &doc("b"), 0.123456, Vec::new(), 0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["similarity"], serde_json::json!(0.1235));
        assert_eq!(json["user1"], "a");
        assert!(json.get("original_code1").is_none());
        assert!(json.get("pair_index").is_none());
    }

    #[test]
    fn test_rank_cmp() {
        let exact = ComparisonResult::exact(&doc("a"), &doc("b"), vec![segment()], 0);
        let high = ComparisonResult::scored(&doc("a"), &doc("c"), 0.95, Vec::new(), 1);
        let high_more = ComparisonResult::scored(&doc("a"), &doc("d"), 0.95, vec![segment()], 2);

        assert_eq!(exact.rank_cmp(&high), Ordering::Less);
        assert_eq!(high_more.rank_cmp(&high), Ordering::Less);
        assert_eq!(high.rank_cmp(&high.clone()), Ordering::Equal);
    }
}
