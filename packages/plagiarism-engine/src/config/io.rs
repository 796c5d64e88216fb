//! Configuration I/O (YAML loading)
//!
//! YAML schema v1:
//!
//! ```yaml
//! version: 1
//! preset: balanced
//! overrides:
//!   threshold: 0.8
//!   min_match_lines: 5
//! ```

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::scan_config::ScanConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported schema versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default)]
    pub preset: Option<String>,

    /// Fine-grained overrides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ScanOverrides>,
}

/// Field overrides applied on top of the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_budget: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_match_lines: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_match_gate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_floor: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_threshold_cutoff: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_threshold_cap: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_interval: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl ScanOverrides {
    /// Apply every present field to `config`
    pub fn apply(self, config: &mut ScanConfig) {
        if let Some(v) = self.threshold {
            config.threshold = v;
        }
        if let Some(v) = self.result_budget {
            config.result_budget = v;
        }
        if let Some(v) = self.min_match_lines {
            config.min_match_lines = v;
        }
        if let Some(v) = self.exact_match_gate {
            config.exact_match_gate = v;
        }
        if let Some(v) = self.segment_floor {
            config.segment_floor = v;
        }
        if let Some(v) = self.low_threshold_cutoff {
            config.low_threshold_cutoff = v;
        }
        if let Some(v) = self.low_threshold_cap {
            config.low_threshold_cap = v;
        }
        if let Some(v) = self.progress_interval {
            config.progress_interval = v;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        if self.template.is_some() {
            config.template = self.template;
        }
    }

    fn from_config(config: &ScanConfig) -> Self {
        Self {
            threshold: Some(config.threshold),
            result_budget: Some(config.result_budget),
            min_match_lines: Some(config.min_match_lines),
            exact_match_gate: Some(config.exact_match_gate),
            segment_floor: Some(config.segment_floor),
            low_threshold_cutoff: Some(config.low_threshold_cutoff),
            low_threshold_cap: Some(config.low_threshold_cap),
            progress_interval: Some(config.progress_interval),
            workers: config.workers,
            template: config.template.clone(),
        }
    }
}

impl ScanConfig {
    /// Load and validate a YAML v1 configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML v1 configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = match file.preset {
            Some(name) => Preset::from_str(&name).map_err(|_| ConfigError::UnknownPreset(name))?,
            None => Preset::default(),
        };

        let mut config = ScanConfig::from_preset(preset);
        if let Some(overrides) = file.overrides {
            overrides.apply(&mut config);
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1 (preset `balanced` plus every field as an override)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            preset: Some(Preset::Balanced.to_string()),
            overrides: Some(ScanOverrides::from_config(self)),
        };

        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}
