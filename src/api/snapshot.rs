use serde::{Deserialize, Serialize};

use crate::core::{LayoutPlan, ScoreRange, Viewport};
use crate::error::{GraphError, GraphResult};

/// Serializable engine state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub viewport: Viewport,
    pub zoom: f64,
    pub range: ScoreRange,
    pub eval_threshold: i32,
    pub last_plan: Option<LayoutPlan>,
}

impl GraphSnapshot {
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}
