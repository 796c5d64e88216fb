//! Preset configurations
//!
//! Presets provide complete default configurations for common review workflows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Exam grading: only near-certain copies
    ///
    /// - Threshold: 0.85
    /// - Min match lines: 5
    Strict,

    /// Homework review: default
    ///
    /// - Threshold: 0.7
    /// - Min match lines: 4
    Balanced,

    /// Exploratory sweep: many weak candidates
    ///
    /// - Threshold: 0.5
    /// - Min match lines: 3
    Lenient,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "balanced" => Ok(Self::Balanced),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }

    /// Preset similarity threshold
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Strict => 0.85,
            Self::Balanced => 0.7,
            Self::Lenient => 0.5,
        }
    }

    /// Preset minimum exact-match block length
    pub fn min_match_lines(&self) -> usize {
        match self {
            Self::Strict => 5,
            Self::Balanced => 4,
            Self::Lenient => 3,
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strict => "strict",
            Self::Balanced => "balanced",
            Self::Lenient => "lenient",
        };
        write!(f, "{}", name)
    }
}
