//! Scan state machine
//!
//! ```text
//! Idle ─▶ Organizing ─▶ Comparing ─▶ Ranking ─▶ Complete
//!   │          │             │           │
//!   └──────────┴─────────────┴───────────┴────▶ Failed
//! ```

use crate::errors::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scan lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStage {
    Idle,
    Organizing,
    Comparing,
    Ranking,
    Complete,
    Failed,
}

impl ScanStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStage::Idle => "idle",
            ScanStage::Organizing => "organizing",
            ScanStage::Comparing => "comparing",
            ScanStage::Ranking => "ranking",
            ScanStage::Complete => "complete",
            ScanStage::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanStage::Complete | ScanStage::Failed)
    }

    pub fn can_transition_to(&self, next: ScanStage) -> bool {
        use ScanStage::*;
        matches!(
            (self, next),
            (Idle, Organizing)
                | (Organizing, Comparing)
                | (Comparing, Ranking)
                | (Ranking, Complete)
                | (Idle | Organizing | Comparing | Ranking, Failed)
        )
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow
    pub fn transition(self, next: ScanStage) -> Result<ScanStage> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(EngineError::InvalidTransition {
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }
}

impl fmt::Display for ScanStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
