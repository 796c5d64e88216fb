//! Auxiliary classifier port
//!
//! An optional model that gives a second opinion on a pair. Running without
//! one is a normal configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classifier opinion on one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub is_plagiarism: bool,

    /// 0 to 100
    pub confidence: f64,

    /// Model features by name
    pub features: BTreeMap<String, f64>,
}

impl Prediction {
    pub fn new(is_plagiarism: bool, confidence: f64) -> Self {
        Self {
            is_plagiarism,
            confidence: confidence.clamp(0.0, 100.0),
            features: BTreeMap::new(),
        }
    }

    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.features.insert(name.into(), value);
        self
    }
}

/// Pairwise plagiarism classifier
pub trait PlagiarismClassifier: Send + Sync {
    /// Whether a trained model is loaded
    fn has_model(&self) -> bool;

    /// Opinion on two raw code strings, `None` when the model abstains
    fn predict(&self, code1: &str, code2: &str) -> Option<Prediction>;
}

/// No model loaded
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl PlagiarismClassifier for NoClassifier {
    fn has_model(&self) -> bool {
        false
    }

    fn predict(&self, _code1: &str, _code2: &str) -> Option<Prediction> {
        None
    }
}
