//! Property-based tests for segment matching and overlap merge
//!
//! - Symmetry: matches(a, b) and matches(b, a) describe the same blocks,
//!   also when a block repeats in one document
//! - Merge: output never overlaps in the first document and never grows
//! - Bounds: every segment meets the minimum and quotes the raw lines

use plagiarism_engine::features::clone_detection::{
    find_exact_matches, merge_overlapping_matches, MatchSegment,
};
use proptest::prelude::*;

/// Document whose lines are pairwise distinct (`v = <n>;`)
fn unique_line_document() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..40, 0..30)
        .prop_map(|numbers| {
            let mut seen = std::collections::HashSet::new();
            numbers
                .into_iter()
                .filter(|n| seen.insert(*n))
                .map(|n| format!("v = {};", n))
                .collect::<Vec<_>>()
                .join("\n")
        })
}

/// Document over a tiny line alphabet, so repeats are common
fn repetitive_document() -> impl Strategy<Value = String> {
    let line = prop::sample::select(vec!["a = 1;", "b = a;", "call(b);", "", "return a;"]);
    prop::collection::vec(line, 0..40).prop_map(|lines| lines.join("\n"))
}

fn segment_strategy() -> impl Strategy<Value = MatchSegment> {
    (1usize..60, 1usize..60, 1usize..12).prop_map(|(start1, start2, count)| MatchSegment {
        segment1: String::new(),
        segment2: String::new(),
        line_start1: start1,
        line_start2: start2,
        line_count: count,
        has_identifier_changes: false,
    })
}

fn block_keys(segments: &[MatchSegment]) -> Vec<(usize, usize, usize)> {
    let mut keys: Vec<_> = segments
        .iter()
        .map(|s| (s.line_start1, s.line_start2, s.line_count))
        .collect();
    keys.sort_unstable();
    keys
}

proptest! {
    #[test]
    fn prop_exact_matches_symmetric(
        a in unique_line_document(),
        b in unique_line_document(),
        min_lines in 2usize..5,
    ) {
        let forward = find_exact_matches(&a, &b, min_lines);
        let backward: Vec<MatchSegment> = find_exact_matches(&b, &a, min_lines)
            .iter()
            .map(MatchSegment::swapped)
            .collect();

        prop_assert_eq!(forward.len(), backward.len());
        prop_assert_eq!(block_keys(&forward), block_keys(&backward));
    }

    #[test]
    fn prop_exact_matches_symmetric_with_repeats(
        a in repetitive_document(),
        b in repetitive_document(),
        min_lines in 2usize..5,
    ) {
        let forward = find_exact_matches(&a, &b, min_lines);
        let backward: Vec<MatchSegment> = find_exact_matches(&b, &a, min_lines)
            .iter()
            .map(MatchSegment::swapped)
            .collect();

        prop_assert_eq!(forward.len(), backward.len());
        prop_assert_eq!(block_keys(&forward), block_keys(&backward));
    }

    #[test]
    fn prop_segments_disjoint_in_both_documents(
        a in repetitive_document(),
        b in repetitive_document(),
    ) {
        let segments = find_exact_matches(&a, &b, 2);
        for (i, x) in segments.iter().enumerate() {
            for y in &segments[i + 1..] {
                prop_assert!(!x.overlaps_in_first(y));
                prop_assert!(!x.swapped().overlaps_in_first(&y.swapped()));
            }
        }
    }

    #[test]
    fn prop_merge_disjoint_and_not_growing(
        segments in prop::collection::vec(segment_strategy(), 0..30)
    ) {
        let input_len = segments.len();
        let merged = merge_overlapping_matches(segments.clone());

        prop_assert!(merged.len() <= input_len);
        for (i, x) in merged.iter().enumerate() {
            prop_assert!(segments.contains(x));
            for y in &merged[i + 1..] {
                prop_assert!(!x.overlaps_in_first(y));
            }
        }
        for pair in merged.windows(2) {
            prop_assert!(pair[0].line_start1 < pair[1].line_start1);
        }
    }

    #[test]
    fn prop_segments_within_bounds(
        a in repetitive_document(),
        b in repetitive_document(),
        min_lines in 2usize..5,
    ) {
        let lines_a: Vec<&str> = a.lines().collect();
        let lines_b: Vec<&str> = b.lines().collect();

        for segment in find_exact_matches(&a, &b, min_lines) {
            prop_assert!(segment.line_count >= min_lines);
            prop_assert!(segment.line_start1 >= 1 && segment.line_start2 >= 1);
            prop_assert!(segment.line_end1() <= lines_a.len());
            prop_assert!(segment.line_end2() <= lines_b.len());

            let quoted = lines_a[segment.line_start1 - 1..segment.line_end1()].join("\n");
            prop_assert_eq!(&segment.segment1, &quoted);
            prop_assert!(!segment.has_identifier_changes);
        }
    }

    #[test]
    fn prop_self_match_covers_document(a in unique_line_document()) {
        let lines = a.lines().count();
        let segments = find_exact_matches(&a, &a, 2);
        if lines >= 2 {
            prop_assert_eq!(segments.len(), 1);
            prop_assert_eq!(segments[0].line_count, lines);
        } else {
            prop_assert!(segments.is_empty());
        }
    }
}

#[test]
fn test_scenario_renamed_block() {
    let a = "int x=1;\nint y=2;\nint z=3;\nint w=4;";
    let b = "int a=1;\nint b=2;\nint c=3;\nint d=4;";

    let segments = find_exact_matches(a, b, 4);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].line_count, 4);
    assert!(segments[0].has_identifier_changes);
    assert_eq!(segments[0].segment2, b);
}

#[test]
fn test_block_repeated_in_one_document() {
    let block = "a();\nb();\nc();\nd();";
    let doubled = format!("{}\nsep();\n{}", block, block);

    assert_eq!(find_exact_matches(&doubled, block, 4).len(), 1);
    assert_eq!(find_exact_matches(block, &doubled, 4).len(), 1);
}
