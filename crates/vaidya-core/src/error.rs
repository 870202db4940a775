use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("severity {0} is outside [1, 5]")]
    InvalidSeverity(u8),

    #[error("duration for symptom '{symptom_id}' must be at least 1, got {value}")]
    InvalidDuration { symptom_id: String, value: u32 },

    #[error("symptom '{0}' appears more than once in the request")]
    DuplicateSymptom(String),

    #[error("at least one symptom must be selected")]
    EmptyRequest,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
