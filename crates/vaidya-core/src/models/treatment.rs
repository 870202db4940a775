use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display grouping for treatments. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentCategory {
    Herbal,
    Dietary,
    Lifestyle,
    Yoga,
    Procedure,
}

impl TreatmentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TreatmentCategory::Herbal => "Herbal Remedies",
            TreatmentCategory::Dietary => "Dietary Changes",
            TreatmentCategory::Lifestyle => "Lifestyle",
            TreatmentCategory::Yoga => "Yoga & Breathing",
            TreatmentCategory::Procedure => "Therapeutic Procedures",
        }
    }
}

impl fmt::Display for TreatmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recommended intervention, associated with one or more conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Treatment {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TreatmentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
    pub condition_ids: Vec<String>,
}

impl Treatment {
    pub fn applies_to(&self, condition_id: &str) -> bool {
        self.condition_ids.iter().any(|id| id == condition_id)
    }
}
