//! Corpus Scan Domain
//!
//! Results, summaries, progress and the scan state machine.

pub mod comparison_result;
pub mod details;
pub mod events;
pub mod report;
pub mod stage;

pub use comparison_result::ComparisonResult;
pub use details::ComparisonDetails;
pub use events::{ProgressEvent, ScanEvent};
pub use report::{ScanReport, ScanSummary};
pub use stage::ScanStage;
