//! Scan Configuration
//!
//! Two-tier configuration:
//! - Level 1: Preset - one-liner (`ScanConfig::from_preset(Preset::Strict)`)
//! - Level 2: YAML v1 - preset plus field overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use plagiarism_engine::config::{Preset, ScanConfig};
//!
//! let config = ScanConfig::from_preset(Preset::Balanced).with_threshold(0.8);
//! config.validate()?;
//!
//! let config = ScanConfig::from_yaml("course-cs101.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod scan_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigFileV1, ScanOverrides};
pub use preset::Preset;
pub use scan_config::{
    ScanConfig, DEFAULT_EXACT_MATCH_GATE, DEFAULT_LOW_THRESHOLD_CAP, DEFAULT_LOW_THRESHOLD_CUTOFF,
    DEFAULT_MIN_MATCH_LINES, DEFAULT_PROGRESS_INTERVAL, DEFAULT_RESULT_BUDGET, DEFAULT_SEGMENT_FLOOR,
    DEFAULT_THRESHOLD,
};
