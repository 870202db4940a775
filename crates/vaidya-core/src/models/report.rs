use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prediction::ConfidenceLevel;

pub const DISCLAIMER: &str = "This report is for informational purposes only and should not be \
considered as medical advice. Please consult with a qualified healthcare professional.";

pub const NO_MATCHES: &str = "We couldn't find any conditions matching your symptoms. Please add \
more symptoms or consult with a healthcare professional for a proper diagnosis.";

/// The structured summary of one analysis. Every field is addressable by
/// name in a report template.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthReport {
    pub title: String,
    pub generated_at: jiff::Timestamp,
    pub prepared_for: Option<String>,
    pub symptoms: Vec<ReportedSymptom>,
    pub profile: Vec<ProfileLine>,
    pub predictions: Vec<ReportPrediction>,
    pub selected: Option<ReportCondition>,
    /// Set when no condition matched; replaces the predictions section.
    pub no_matches: Option<String>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportedSymptom {
    pub name: String,
    pub category: String,
    pub severity: String,
    pub duration: String,
    pub frequency: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportPrediction {
    pub condition_id: String,
    pub name: String,
    pub confidence: u8,
    pub level: ConfidenceLevel,
    pub level_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportCondition {
    pub name: String,
    pub description: String,
    pub risk_factors: Vec<String>,
    pub treatment_groups: Vec<TreatmentGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentGroup {
    pub category: String,
    pub treatments: Vec<ReportTreatment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportTreatment {
    pub name: String,
    pub description: String,
    pub instructions: Option<String>,
    pub dosage: Option<String>,
    pub duration: Option<String>,
    pub precautions: Vec<String>,
}
