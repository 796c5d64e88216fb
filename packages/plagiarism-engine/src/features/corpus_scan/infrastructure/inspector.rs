//! Single-pair drill-down

use crate::config::ScanConfig;
use crate::features::clone_detection::{line_sequence_similarity, token_set_similarity, SegmentMatcher};
use crate::features::corpus_scan::domain::ComparisonDetails;
use crate::shared::models::Document;
use std::collections::HashSet;

/// Every signal the engine has for one pair
pub fn compare_documents(a: &Document, b: &Document, config: &ScanConfig) -> ComparisonDetails {
    let matcher = SegmentMatcher::with_min_lines(config.min_match_lines);
    let non_empty = |text: &str| text.lines().filter(|l| !l.trim().is_empty()).count();

    ComparisonDetails {
        user1: a.author.clone(),
        file1: a.filename.clone(),
        user2: b.author.clone(),
        file2: b.filename.clone(),
        original_code1: a.raw_text.clone(),
        original_code2: b.raw_text.clone(),
        normalized_code1: a.normalized_text.clone(),
        normalized_code2: b.normalized_text.clone(),
        token_similarity: token_set_similarity(&a.normalized_text, &b.normalized_text),
        sequence_similarity: line_sequence_similarity(&a.normalized_text, &b.normalized_text),
        line_matches: find_matching_lines(&a.normalized_text, &b.normalized_text).len(),
        total_lines: non_empty(&a.normalized_text).max(non_empty(&b.normalized_text)),
        segments: matcher.find_segments(a, b),
    }
}

/// Distinct trimmed non-empty lines of `a` that also occur in `b`, in
/// first-occurrence order
pub fn find_matching_lines(a: &str, b: &str) -> Vec<String> {
    let lines_b: HashSet<&str> = b
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut seen = HashSet::new();
    a.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && lines_b.contains(l) && seen.insert(*l))
        .map(str::to_string)
        .collect()
}
