//! Result ranking
//!
//! Exact matches first, then similarity, then segment count, all descending.
//! Pairs with equal keys keep scan order.

use crate::features::corpus_scan::domain::ComparisonResult;

/// Rank and truncate to `budget`
pub fn rank_results(mut results: Vec<ComparisonResult>, budget: usize) -> Vec<ComparisonResult> {
    // Scan order first so the stable sort below preserves it on ties
    results.sort_by_key(|r| r.pair_index);
    results.sort_by(|a, b| a.rank_cmp(b));
    results.truncate(budget);
    results
}
