//! Corpus Scan
//!
//! The quadratic all-pairs scan over a corpus of submissions: author
//! exclusion, exact-match-first policy, token-similarity gating, ranking and
//! the result budget, with progress pushed to a sink.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! application/     ScanUseCase (entry point, lifecycle)
//!      ↓
//! infrastructure/  organizer, PairScanner (rayon), ranker, inspector
//!      ↓
//! domain/          ComparisonResult, ScanSummary, ScanReport, events, ScanStage
//! ports/           CorpusSource, PlagiarismClassifier, ProgressSink
//! ```
//!
//! # Usage
//!
//! ```
//! use plagiarism_engine::config::ScanConfig;
//! use plagiarism_engine::features::corpus_scan::ports::{InMemoryCorpus, NoopSink};
//! use plagiarism_engine::features::corpus_scan::{ScanUseCase, ScanUseCaseImpl};
//!
//! let corpus = InMemoryCorpus::new()
//!     .with_file("alice", "sum.c", "int s = 0;\nfor (int i = 0; i < n; i++)\n  s += a[i];\nreturn s;\n")
//!     .with_file("bob", "sum.c", "int t = 0;\nfor (int k = 0; k < n; k++)\n  t += a[k];\nreturn t;\n");
//!
//! let report = ScanUseCaseImpl::new(ScanConfig::default())
//!     .run(&corpus, &NoopSink)
//!     .unwrap();
//!
//! assert_eq!(report.results.len(), 1);
//! assert!(report.results[0].is_exact_match);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{ScanUseCase, ScanUseCaseImpl};
pub use domain::{
    ComparisonDetails, ComparisonResult, ProgressEvent, ScanEvent, ScanReport, ScanStage,
    ScanSummary,
};
pub use infrastructure::{compare_documents, find_matching_lines, CancellationToken, PairScanner};
