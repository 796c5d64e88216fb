//! Similarity Metrics
//!
//! - Token-set similarity: Jaccard over whitespace-delimited tokens
//! - Sequence similarity: `2 * LCS / (len_a + len_b)` over characters or lines
//!
//! Every metric returns a value in [0.0, 1.0]. Empty input scores 0.0: two
//! empty documents are not evidence of copying.

use std::collections::HashSet;
use std::hash::Hash;

/// Jaccard similarity coefficient
///
/// J(A, B) = |A ∩ B| / |A ∪ B|, and 0.0 when either set is empty.
pub fn jaccard_similarity<T>(set_a: &HashSet<T>, set_b: &HashSet<T>) -> f64
where
    T: Eq + Hash,
{
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection_size = set_a.intersection(set_b).count();
    let union_size = set_a.len() + set_b.len() - intersection_size;

    intersection_size as f64 / union_size as f64
}

/// Jaccard over whitespace-delimited tokens of two normalized texts
pub fn token_set_similarity(norm_a: &str, norm_b: &str) -> f64 {
    let set_a: HashSet<&str> = norm_a.split_whitespace().collect();
    let set_b: HashSet<&str> = norm_b.split_whitespace().collect();
    jaccard_similarity(&set_a, &set_b)
}

/// Headline pair score
pub fn score(norm_a: &str, norm_b: &str) -> f64 {
    token_set_similarity(norm_a, norm_b)
}

/// Longest Common Subsequence length
///
/// Dynamic programming, O(n*m) time, two rows of O(m) space.
pub fn lcs_length<T>(seq_a: &[T], seq_b: &[T]) -> usize
where
    T: Eq,
{
    let len_a = seq_a.len();
    let len_b = seq_b.len();

    if len_a == 0 || len_b == 0 {
        return 0;
    }

    let mut prev_row: Vec<usize> = vec![0; len_b + 1];
    let mut curr_row: Vec<usize> = vec![0; len_b + 1];

    for i in 1..=len_a {
        for j in 1..=len_b {
            curr_row[j] = if seq_a[i - 1] == seq_b[j - 1] {
                prev_row[j - 1] + 1
            } else {
                curr_row[j - 1].max(prev_row[j])
            };
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_b]
}

/// `2 * LCS / (len_a + len_b)`
pub fn sequence_similarity<T>(seq_a: &[T], seq_b: &[T]) -> f64
where
    T: Eq,
{
    let total = seq_a.len() + seq_b.len();
    if total == 0 {
        return 0.0;
    }
    (2 * lcs_length(seq_a, seq_b)) as f64 / total as f64
}

/// Sequence similarity over characters
pub fn char_sequence_similarity(a: &str, b: &str) -> f64 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    sequence_similarity(&chars_a, &chars_b)
}

/// Sequence similarity over lines
pub fn line_sequence_similarity(a: &str, b: &str) -> f64 {
    let lines_a: Vec<&str> = a.lines().collect();
    let lines_b: Vec<&str> = b.lines().collect();
    sequence_similarity(&lines_a, &lines_b)
}
