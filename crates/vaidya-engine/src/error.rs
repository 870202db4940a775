use thiserror::Error;
use vaidya_core::error::CoreError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("no symptoms were provided")]
    EmptyInput,

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] CoreError),
}

/// Reference data that breaks one of the dataset invariants.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("duplicate condition id: {0}")]
    DuplicateCondition(String),

    #[error("duplicate treatment id: {0}")]
    DuplicateTreatment(String),

    #[error("condition '{condition_id}' weights symptom '{symptom_id}' at {weight}, expected [0, 1]")]
    WeightOutOfRange {
        condition_id: String,
        symptom_id: String,
        weight: f64,
    },

    #[error("condition '{condition_id}' weights symptom '{symptom_id}' more than once")]
    DuplicateWeight {
        condition_id: String,
        symptom_id: String,
    },

    #[error("condition '{condition_id}' references unknown symptom '{symptom_id}'")]
    UnknownSymptomReference {
        condition_id: String,
        symptom_id: String,
    },

    #[error("treatment '{treatment_id}' references unknown condition '{condition_id}'")]
    UnknownConditionReference {
        treatment_id: String,
        condition_id: String,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}
