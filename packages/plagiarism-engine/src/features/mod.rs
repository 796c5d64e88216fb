//! Feature slices
//!
//! ```text
//! normalization     raw text → canonical comparable form
//!       ↓
//! clone_detection   segment matching, overlap merge, similarity metrics
//!       ↓
//! corpus_scan       pairwise scan, ranking, progress, report
//! ```

pub mod clone_detection;
pub mod corpus_scan;
pub mod normalization;
