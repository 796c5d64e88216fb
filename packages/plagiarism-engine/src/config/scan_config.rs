//! Scan configuration
//!
//! Thresholds, result budget and matcher parameters for one corpus scan.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use serde::{Deserialize, Serialize};

/// Default similarity threshold for reporting a pair
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Default maximum number of reported results
pub const DEFAULT_RESULT_BUDGET: usize = 1000;

/// Default minimum exact-match block length (lines)
pub const DEFAULT_MIN_MATCH_LINES: usize = 4;

/// Thresholds above this run the segment matcher before token similarity
pub const DEFAULT_EXACT_MATCH_GATE: f64 = 0.4;

/// Segments are only extracted for scored matches above this similarity
pub const DEFAULT_SEGMENT_FLOOR: f64 = 0.3;

/// Thresholds below this cap the result budget
pub const DEFAULT_LOW_THRESHOLD_CUTOFF: f64 = 0.3;

/// Result budget cap applied for low thresholds
pub const DEFAULT_LOW_THRESHOLD_CAP: usize = 100;

/// Pairs between progress events (also the cancellation batch size)
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

/// Scan configuration
///
/// # Example
/// ```
/// use plagiarism_engine::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.threshold, 0.7);
/// assert_eq!(config.effective_result_budget(), 1000);
///
/// let noisy = ScanConfig::default().with_threshold(0.2);
/// assert_eq!(noisy.effective_result_budget(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Token-set similarity a pair must exceed to be reported (0.0..=1.0)
    pub threshold: f64,

    /// Maximum number of results kept after ranking (1..=100000)
    pub result_budget: usize,

    /// Minimum exact-match block length in lines (2..=50)
    pub min_match_lines: usize,

    /// Thresholds strictly above this run exact-match detection first
    pub exact_match_gate: f64,

    /// Scored matches extract segments only above this similarity
    pub segment_floor: f64,

    /// Thresholds strictly below this apply `low_threshold_cap`
    pub low_threshold_cutoff: f64,

    /// Result budget cap for low thresholds
    pub low_threshold_cap: usize,

    /// Pairs per progress event and per cancellation check (1..=100000)
    pub progress_interval: usize,

    /// Worker threads (None = one per CPU)
    pub workers: Option<usize>,

    /// Boilerplate source whose lines are excluded from every document
    pub template: Option<String>,
}

impl ScanConfig {
    /// Get preset configuration
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            threshold: preset.threshold(),
            min_match_lines: preset.min_match_lines(),
            ..Self::base()
        }
    }

    fn base() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            result_budget: DEFAULT_RESULT_BUDGET,
            min_match_lines: DEFAULT_MIN_MATCH_LINES,
            exact_match_gate: DEFAULT_EXACT_MATCH_GATE,
            segment_floor: DEFAULT_SEGMENT_FLOOR,
            low_threshold_cutoff: DEFAULT_LOW_THRESHOLD_CUTOFF,
            low_threshold_cap: DEFAULT_LOW_THRESHOLD_CAP,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            workers: None,
            template: None,
        }
    }

    /// Override the similarity threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the result budget
    pub fn with_result_budget(mut self, budget: usize) -> Self {
        self.result_budget = budget;
        self
    }

    /// Override the minimum exact-match length
    pub fn with_min_match_lines(mut self, lines: usize) -> Self {
        self.min_match_lines = lines;
        self
    }

    /// Override the progress interval
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Pin the worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the boilerplate template
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Whether exact-match detection runs before token similarity
    pub fn runs_exact_match_first(&self) -> bool {
        self.threshold > self.exact_match_gate
    }

    /// Result budget after the low-threshold cap
    pub fn effective_result_budget(&self) -> usize {
        if self.threshold < self.low_threshold_cutoff {
            self.result_budget.min(self.low_threshold_cap)
        } else {
            self.result_budget
        }
    }

    /// Worker thread count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        check_fraction("threshold", self.threshold)?;
        check_fraction("exact_match_gate", self.exact_match_gate)?;
        check_fraction("segment_floor", self.segment_floor)?;
        check_fraction("low_threshold_cutoff", self.low_threshold_cutoff)?;

        if self.result_budget < 1 || self.result_budget > 100_000 {
            return Err(ConfigError::range_with_hint(
                "result_budget",
                self.result_budget,
                1,
                100_000,
                "Report must keep at least one result",
            ));
        }

        if self.low_threshold_cap < 1 || self.low_threshold_cap > 100_000 {
            return Err(ConfigError::range_with_hint(
                "low_threshold_cap",
                self.low_threshold_cap,
                1,
                100_000,
                "Cap must keep at least one result",
            ));
        }

        if self.min_match_lines < 2 || self.min_match_lines > 50 {
            return Err(ConfigError::range_with_hint(
                "min_match_lines",
                self.min_match_lines,
                2,
                50,
                "Single-line matches are too common to be evidence",
            ));
        }

        if self.progress_interval < 1 || self.progress_interval > 100_000 {
            return Err(ConfigError::range_with_hint(
                "progress_interval",
                self.progress_interval,
                1,
                100_000,
                "Progress must be reported at least once per 100000 pairs",
            ));
        }

        if let Some(workers) = self.workers {
            if workers < 1 || workers > 1024 {
                return Err(ConfigError::range_with_hint(
                    "workers",
                    workers,
                    1,
                    1024,
                    "Omit the field to use one worker per CPU",
                ));
            }
        }

        Ok(())
    }
}

fn check_fraction(field: &str, value: f64) -> ConfigResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::range_with_hint(
            field,
            value,
            0.0,
            1.0,
            "Similarity values are fractions",
        ));
    }
    Ok(())
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Balanced)
    }
}
