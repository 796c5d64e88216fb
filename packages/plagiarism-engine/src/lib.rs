/*
 * Plagiarism Engine - Similarity Detection Across Submission Corpora
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Document, Language) and tree-sitter helpers
 * - features/    : Vertical slices (normalization → clone_detection → corpus_scan)
 * - config/      : Scan configuration (presets, YAML v1, validation)
 *
 * Performance:
 * - Rayon work-stealing over independent document pairs
 * - Per-document normalization computed once, shared read-only by all pairs
 */

#![allow(clippy::too_many_arguments)] // Result constructors carry both documents
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // Preset::from_str returns a plain String error

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Scan configuration
pub mod config;

/// Error types
pub mod errors;

/// Feature slices
pub mod features;

/// Shared models and utilities
pub mod shared;

pub use config::{ConfigError, Preset, ScanConfig};
pub use errors::{EngineError, Result};
pub use features::clone_detection::{
    find_exact_matches, merge_overlapping_matches, score, sequence_similarity,
    token_set_similarity, MatchSegment, SegmentMatcher,
};
pub use features::corpus_scan::ports::{
    CollectingSink, CorpusSource, FileContent, InMemoryCorpus, NoClassifier, NoopSink,
    PlagiarismClassifier, Prediction, ProgressSink, Submission, SubmissionFile,
};
pub use features::corpus_scan::{
    compare_documents, find_matching_lines, CancellationToken, ComparisonDetails,
    ComparisonResult, PairScanner, ProgressEvent, ScanEvent, ScanReport, ScanStage, ScanSummary,
    ScanUseCase, ScanUseCaseImpl,
};
pub use features::normalization::{normalize, normalize_with_language, Normalizer};
pub use shared::models::{Document, Language};
