//! Segment Matcher
//!
//! Finds runs of at least `min_lines` consecutive lines that are identical
//! after identifier normalization and trimming.
//!
//! # Algorithm
//!
//! For each start line `i` of the leading document, candidate starts `j` of
//! the other are visited in ascending order (looked up through a line →
//! positions index). A run grows while both lines are equal, non-empty and
//! the second line is not yet claimed. The first candidate whose run reaches
//! `min_lines` is recorded, its lines are claimed on both sides and `i` skips
//! past the block; otherwise `i` advances by one.
//!
//! The leading document is the one whose canonical lines sort first, so
//! matching `(a, b)` and `(b, a)` yields the same blocks with sides swapped.

use super::overlap_merger::merge_overlapping_matches;
use crate::config::DEFAULT_MIN_MATCH_LINES;
use crate::features::clone_detection::domain::MatchSegment;
use crate::features::normalization::Normalizer;
use crate::shared::models::Document;
use std::collections::HashMap;

/// One matched run, 0-based line indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    pub start_a: usize,
    pub start_b: usize,
    pub len: usize,
}

impl LineRun {
    /// Same run seen from the other document
    pub fn swapped(self) -> LineRun {
        LineRun {
            start_a: self.start_b,
            start_b: self.start_a,
            len: self.len,
        }
    }
}

/// Greedy exact segment matcher
#[derive(Debug, Clone, Copy)]
pub struct SegmentMatcher {
    min_lines: usize,
}

impl Default for SegmentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentMatcher {
    pub fn new() -> Self {
        Self {
            min_lines: DEFAULT_MIN_MATCH_LINES,
        }
    }

    /// Matcher with a custom minimum run length (at least 1)
    pub fn with_min_lines(min_lines: usize) -> Self {
        Self {
            min_lines: min_lines.max(1),
        }
    }

    pub fn min_lines(&self) -> usize {
        self.min_lines
    }

    /// Greedy runs over two canonical line sequences, independent of
    /// argument order
    pub fn match_pair<S: AsRef<str>>(&self, lines_a: &[S], lines_b: &[S]) -> Vec<LineRun> {
        if sorts_before(lines_b, lines_a) {
            self.match_lines(lines_b, lines_a)
                .into_iter()
                .map(LineRun::swapped)
                .collect()
        } else {
            self.match_lines(lines_a, lines_b)
        }
    }

    /// Greedy runs led by `lines_a`; each line of `lines_b` joins at most one run
    pub fn match_lines<S: AsRef<str>>(&self, lines_a: &[S], lines_b: &[S]) -> Vec<LineRun> {
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        for (j, line) in lines_b.iter().enumerate() {
            let line = line.as_ref();
            if !line.is_empty() {
                positions.entry(line).or_default().push(j);
            }
        }

        let mut claimed = vec![false; lines_b.len()];
        let mut runs = Vec::new();
        let mut i = 0;
        while i < lines_a.len() {
            let line: &str = lines_a[i].as_ref();
            let found = positions.get(line).and_then(|starts| {
                starts.iter().find_map(|&j| {
                    let len = run_length(lines_a, lines_b, &claimed, i, j);
                    (len >= self.min_lines).then_some(LineRun {
                        start_a: i,
                        start_b: j,
                        len,
                    })
                })
            });

            match found {
                Some(run) => {
                    claimed[run.start_b..run.start_b + run.len].fill(true);
                    i += run.len;
                    runs.push(run);
                }
                None => i += 1,
            }
        }
        runs
    }

    /// Candidate segments between two prepared documents, before merging
    pub fn match_documents(&self, a: &Document, b: &Document) -> Vec<MatchSegment> {
        let raw_a = a.raw_lines();
        let raw_b = b.raw_lines();
        self.match_pair(&a.canonical_lines, &b.canonical_lines)
            .into_iter()
            .map(|run| build_segment(&raw_a, &raw_b, run))
            .collect()
    }

    /// Merged segments between two prepared documents
    pub fn find_segments(&self, a: &Document, b: &Document) -> Vec<MatchSegment> {
        merge_overlapping_matches(self.match_documents(a, b))
    }

    /// Candidate segments between two raw texts, using the lexical tokenizer
    pub fn find_exact_matches(&self, raw_a: &str, raw_b: &str) -> Vec<MatchSegment> {
        let normalizer = Normalizer::lexical();
        let lines_a = normalizer.canonicalize_lines(raw_a);
        let lines_b = normalizer.canonicalize_lines(raw_b);
        let raw_lines_a: Vec<&str> = raw_a.lines().collect();
        let raw_lines_b: Vec<&str> = raw_b.lines().collect();

        self.match_pair(&lines_a, &lines_b)
            .into_iter()
            .map(|run| build_segment(&raw_lines_a, &raw_lines_b, run))
            .collect()
    }
}

/// Merged exact matches between two raw texts
pub fn find_exact_matches(raw_a: &str, raw_b: &str, min_lines: usize) -> Vec<MatchSegment> {
    let matcher = SegmentMatcher::with_min_lines(min_lines);
    merge_overlapping_matches(matcher.find_exact_matches(raw_a, raw_b))
}

/// Lexicographic order of two line sequences
fn sorts_before<S: AsRef<str>>(x: &[S], y: &[S]) -> bool {
    let x: Vec<&str> = x.iter().map(AsRef::<str>::as_ref).collect();
    let y: Vec<&str> = y.iter().map(AsRef::<str>::as_ref).collect();
    x < y
}

fn run_length<S: AsRef<str>>(
    lines_a: &[S],
    lines_b: &[S],
    claimed: &[bool],
    i: usize,
    j: usize,
) -> usize {
    let mut len = 0;
    while i + len < lines_a.len() && j + len < lines_b.len() && !claimed[j + len] {
        let a: &str = lines_a[i + len].as_ref();
        let b: &str = lines_b[j + len].as_ref();
        if a.is_empty() || a != b {
            break;
        }
        len += 1;
    }
    len
}

fn build_segment(raw_a: &[&str], raw_b: &[&str], run: LineRun) -> MatchSegment {
    let original = |lines: &[&str], start: usize| -> Vec<String> {
        (start..start + run.len)
            .map(|k| lines.get(k).copied().unwrap_or("").to_string())
            .collect()
    };
    let lines_a = original(raw_a, run.start_a);
    let lines_b = original(raw_b, run.start_b);

    let has_identifier_changes = lines_a
        .iter()
        .zip(&lines_b)
        .any(|(a, b)| a.trim() != b.trim());

    MatchSegment {
        segment1: lines_a.join("\n"),
        segment2: lines_b.join("\n"),
        line_start1: run.start_a + 1,
        line_start2: run.start_b + 1,
        line_count: run.len,
        has_identifier_changes,
    }
}
