use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A candidate condition scored against a symptom report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Condition {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    /// Relevance of each associated symptom, each weight in [0, 1].
    pub symptom_weights: Vec<SymptomWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomWeight {
    pub symptom_id: String,
    pub weight: f64,
}

impl Condition {
    /// Weight of `symptom_id` for this condition, if the two are associated.
    pub fn weight_for(&self, symptom_id: &str) -> Option<f64> {
        self.symptom_weights
            .iter()
            .find(|w| w.symptom_id == symptom_id)
            .map(|w| w.weight)
    }

    /// Score reached when every associated symptom is reported at maximum
    /// severity.
    pub fn max_attainable_score(&self) -> f64 {
        self.symptom_weights.iter().map(|w| w.weight).sum()
    }
}
