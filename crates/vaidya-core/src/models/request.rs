use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile::UserProfile;
use super::severity::Severity;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DurationUnit {
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Frequency {
    Rarely,
    Occasionally,
    #[default]
    Often,
    Daily,
    Constantly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Rarely => "Rarely (once in a while)",
            Frequency::Occasionally => "Occasionally (a few times a month)",
            Frequency::Often => "Often (a few times a week)",
            Frequency::Daily => "Daily",
            Frequency::Constantly => "Constantly (throughout the day)",
        }
    }
}

/// Everything the intake form records about one selected symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomDetail {
    pub symptom_id: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default = "default_duration_value")]
    pub duration_value: u32,
    #[serde(default)]
    pub duration_unit: DurationUnit,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_duration_value() -> u32 {
    1
}

impl SymptomDetail {
    /// Detail as first recorded when a symptom is ticked: significant,
    /// one day, often.
    pub fn new(symptom_id: impl Into<String>) -> Self {
        Self {
            symptom_id: symptom_id.into(),
            severity: Severity::default(),
            duration_value: default_duration_value(),
            duration_unit: DurationUnit::default(),
            frequency: Frequency::default(),
            notes: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_duration(mut self, value: u32, unit: DurationUnit) -> Self {
        self.duration_value = value;
        self.duration_unit = unit;
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.duration_value == 0 {
            return Err(CoreError::InvalidDuration {
                symptom_id: self.symptom_id.clone(),
                value: self.duration_value,
            });
        }
        Ok(())
    }
}

/// Typed hand-off from the intake collaborator to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisRequest {
    pub symptoms: Vec<SymptomDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

impl AnalysisRequest {
    pub fn new(symptoms: Vec<SymptomDetail>) -> Self {
        Self {
            symptoms,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let request: AnalysisRequest = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Shape checks that need no reference data. Symptom ids are resolved
    /// by the engine.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.symptoms.is_empty() {
            return Err(CoreError::EmptyRequest);
        }
        let mut seen = BTreeSet::new();
        for detail in &self.symptoms {
            if !seen.insert(detail.symptom_id.as_str()) {
                return Err(CoreError::DuplicateSymptom(detail.symptom_id.clone()));
            }
            detail.validate()?;
        }
        Ok(())
    }

    pub fn symptom_ids(&self) -> BTreeSet<String> {
        self.symptoms.iter().map(|d| d.symptom_id.clone()).collect()
    }

    pub fn severities(&self) -> BTreeMap<String, Severity> {
        self.symptoms
            .iter()
            .map(|d| (d.symptom_id.clone(), d.severity))
            .collect()
    }

    pub fn detail(&self, symptom_id: &str) -> Option<&SymptomDetail> {
        self.symptoms.iter().find(|d| d.symptom_id == symptom_id)
    }
}
