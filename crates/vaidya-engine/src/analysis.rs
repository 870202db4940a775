use tracing::info;
use vaidya_core::models::analysis::{Analysis, SelectedCondition};
use vaidya_core::models::request::AnalysisRequest;

use crate::dataset::ReferenceData;
use crate::error::EngineError;
use crate::predict::predict;
use crate::resolve::treatments_for;

/// Run a full analysis: validate the request, rank conditions, and resolve
/// treatments for the top-ranked one.
pub fn analyze(data: &ReferenceData, request: &AnalysisRequest) -> Result<Analysis, EngineError> {
    if request.symptoms.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    request.validate()?;

    let predictions = predict(data, &request.symptom_ids(), &request.severities())?;

    let selected = match predictions.first() {
        Some(top) => Some(SelectedCondition {
            condition_id: top.condition.id.clone(),
            treatments: treatments_for(data, &top.condition.id)?,
        }),
        None => None,
    };

    info!(
        symptoms = request.symptoms.len(),
        matches = predictions.len(),
        "analysis complete"
    );

    Ok(Analysis {
        predictions,
        selected,
    })
}

/// Switch the displayed condition to `condition_id`, which must be one of
/// the analysis' predictions.
pub fn select(
    data: &ReferenceData,
    analysis: &Analysis,
    condition_id: &str,
) -> Result<Analysis, EngineError> {
    if analysis.prediction(condition_id).is_none() {
        return Err(EngineError::UnknownCondition(condition_id.to_string()));
    }

    Ok(Analysis {
        predictions: analysis.predictions.clone(),
        selected: Some(SelectedCondition {
            condition_id: condition_id.to_string(),
            treatments: treatments_for(data, condition_id)?,
        }),
    })
}
