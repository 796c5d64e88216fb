//! Corpus Scan Ports
//!
//! Collaborators the engine talks to without knowing their implementation:
//! - `CorpusSource`: supplies submissions grouped by author
//! - `PlagiarismClassifier`: optional auxiliary model
//! - `ProgressSink`: receives progress and terminal events

pub mod classifier;
pub mod corpus;
pub mod progress;

pub use classifier::{NoClassifier, PlagiarismClassifier, Prediction};
pub use corpus::{CorpusSource, FileContent, InMemoryCorpus, Submission, SubmissionFile};
pub use progress::{CollectingSink, NoopSink, ProgressSink};
