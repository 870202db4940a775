use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::condition::Condition;

/// One ranked candidate from the predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub condition: Condition,
    /// Relative match strength, 0–100. Not a calibrated probability.
    pub confidence: u8,
}

impl PredictionResult {
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub fn from_confidence(confidence: u8) -> Self {
        match confidence {
            80..=u8::MAX => ConfidenceLevel::High,
            50..=79 => ConfidenceLevel::Moderate,
            _ => ConfidenceLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Moderate => "Moderate",
            ConfidenceLevel::Low => "Low",
        }
    }
}
