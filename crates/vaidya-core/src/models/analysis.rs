use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prediction::PredictionResult;
use super::treatment::Treatment;

/// Outcome of one analysis: ranked predictions and the treatments for the
/// condition currently on display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Analysis {
    pub predictions: Vec<PredictionResult>,
    pub selected: Option<SelectedCondition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectedCondition {
    pub condition_id: String,
    pub treatments: Vec<Treatment>,
}

impl Analysis {
    /// No condition matched any reported symptom. A valid outcome, not an
    /// error.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    pub fn top(&self) -> Option<&PredictionResult> {
        self.predictions.first()
    }

    pub fn prediction(&self, condition_id: &str) -> Option<&PredictionResult> {
        self.predictions
            .iter()
            .find(|p| p.condition.id == condition_id)
    }
}
