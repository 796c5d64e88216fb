//! Corpus Scan Infrastructure
//!
//! - `organizer`: submissions → normalized documents (parallel)
//! - `pair_scanner`: all-pairs comparison on a rayon pool
//! - `ranker`: ordering and result budget
//! - `inspector`: single-pair drill-down
//! - `cancellation`: cooperative stop signal

pub mod cancellation;
pub mod inspector;
pub mod organizer;
pub mod pair_scanner;
pub mod ranker;

pub use cancellation::CancellationToken;
pub use inspector::{compare_documents, find_matching_lines};
pub use organizer::organize_documents;
pub use pair_scanner::{PairScanner, ScanOutcome};
pub use ranker::rank_results;
