use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vaidya_core::models::condition::Condition;
use vaidya_core::models::symptom::{Symptom, SymptomCategory};
use vaidya_core::models::treatment::Treatment;

use crate::error::DatasetError;

/// The immutable symptom, condition and treatment tables the engine scores
/// against. Construction checks every cross-reference, so lookups after
/// that point never need to.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
    treatments: Vec<Treatment>,
    symptom_index: BTreeMap<String, usize>,
    condition_index: BTreeMap<String, usize>,
}

/// On-disk / on-wire shape of a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetFile {
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub treatments: Vec<Treatment>,
}

impl ReferenceData {
    pub fn new(
        symptoms: Vec<Symptom>,
        conditions: Vec<Condition>,
        treatments: Vec<Treatment>,
    ) -> Result<Self, DatasetError> {
        let mut symptom_index = BTreeMap::new();
        for (idx, symptom) in symptoms.iter().enumerate() {
            if symptom_index.insert(symptom.id.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateSymptom(symptom.id.clone()));
            }
        }

        let mut condition_index = BTreeMap::new();
        for (idx, condition) in conditions.iter().enumerate() {
            if condition_index.insert(condition.id.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateCondition(condition.id.clone()));
            }
            validate_weights(condition, &symptom_index)?;
        }

        let mut treatment_ids = BTreeSet::new();
        for treatment in &treatments {
            if !treatment_ids.insert(treatment.id.as_str()) {
                return Err(DatasetError::DuplicateTreatment(treatment.id.clone()));
            }
            if let Some(missing) = treatment
                .condition_ids
                .iter()
                .find(|id| !condition_index.contains_key(id.as_str()))
            {
                return Err(DatasetError::UnknownConditionReference {
                    treatment_id: treatment.id.clone(),
                    condition_id: missing.clone(),
                });
            }
        }

        debug!(
            symptoms = symptoms.len(),
            conditions = conditions.len(),
            treatments = treatments.len(),
            "reference data validated"
        );

        Ok(Self {
            symptoms,
            conditions,
            treatments,
            symptom_index,
            condition_index,
        })
    }

    pub fn from_file(file: DatasetFile) -> Result<Self, DatasetError> {
        Self::new(file.symptoms, file.conditions, file.treatments)
    }

    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    pub fn to_file(&self) -> DatasetFile {
        DatasetFile {
            symptoms: self.symptoms.clone(),
            conditions: self.conditions.clone(),
            treatments: self.treatments.clone(),
        }
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptom_index.get(id).map(|&idx| &self.symptoms[idx])
    }

    pub fn condition(&self, id: &str) -> Option<&Condition> {
        self.condition_index.get(id).map(|&idx| &self.conditions[idx])
    }

    /// Symptoms in one intake tab, in dataset order.
    pub fn symptoms_by_category(&self, category: SymptomCategory) -> Vec<&Symptom> {
        self.symptoms
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }
}

fn validate_weights(
    condition: &Condition,
    symptom_index: &BTreeMap<String, usize>,
) -> Result<(), DatasetError> {
    let mut seen = BTreeSet::new();
    for entry in &condition.symptom_weights {
        if !symptom_index.contains_key(&entry.symptom_id) {
            return Err(DatasetError::UnknownSymptomReference {
                condition_id: condition.id.clone(),
                symptom_id: entry.symptom_id.clone(),
            });
        }
        if !seen.insert(entry.symptom_id.as_str()) {
            return Err(DatasetError::DuplicateWeight {
                condition_id: condition.id.clone(),
                symptom_id: entry.symptom_id.clone(),
            });
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&entry.weight) {
            return Err(DatasetError::WeightOutOfRange {
                condition_id: condition.id.clone(),
                symptom_id: entry.symptom_id.clone(),
                weight: entry.weight,
            });
        }
    }
    Ok(())
}
