use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use vaidya_core::models::condition::Condition;
use vaidya_core::models::prediction::PredictionResult;
use vaidya_core::models::severity::Severity;

use crate::dataset::ReferenceData;
use crate::error::EngineError;

/// Linear normalization of the 1–5 severity scale onto [0.2, 1.0].
pub fn severity_factor(severity: Severity) -> f64 {
    f64::from(severity.value()) / f64::from(Severity::MAX)
}

/// Rank every condition in `data` against the reported symptoms.
///
/// A selected symptom with no entry in `severities` is scored as
/// [`Severity::SIGNIFICANT`]. Entries in `severities` for unselected
/// symptoms are ignored. Conditions that none of the symptoms contribute to,
/// or whose confidence rounds down to 0%, are left out entirely, so an empty
/// result means "no matches".
///
/// Results are sorted by descending confidence, ties by condition id.
pub fn predict(
    data: &ReferenceData,
    symptom_ids: &BTreeSet<String>,
    severities: &BTreeMap<String, Severity>,
) -> Result<Vec<PredictionResult>, EngineError> {
    if symptom_ids.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    if let Some(unknown) = symptom_ids.iter().find(|id| data.symptom(id).is_none()) {
        return Err(EngineError::UnknownSymptom(unknown.clone()));
    }

    let report: Vec<(&str, f64)> = symptom_ids
        .iter()
        .map(|id| {
            let severity = severities.get(id).copied().unwrap_or_default();
            (id.as_str(), severity_factor(severity))
        })
        .collect();

    let mut results: Vec<PredictionResult> = data
        .conditions()
        .iter()
        .filter_map(|condition| {
            confidence(condition, &report).map(|confidence| PredictionResult {
                condition: condition.clone(),
                confidence,
            })
        })
        .collect();

    results.sort_by(|a, b| match b.confidence.cmp(&a.confidence) {
        Ordering::Equal => a.condition.id.cmp(&b.condition.id),
        other => other,
    });

    debug!(
        symptoms = symptom_ids.len(),
        matches = results.len(),
        top = ?results.first().map(|r| r.condition.id.as_str()),
        "prediction complete"
    );

    Ok(results)
}

/// Percentage of the condition's attainable score reached by `report`, or
/// `None` when the report contributes nothing that survives rounding.
fn confidence(condition: &Condition, report: &[(&str, f64)]) -> Option<u8> {
    let raw: f64 = report
        .iter()
        .filter_map(|(id, factor)| condition.weight_for(id).map(|w| w * factor))
        .sum();
    let max = condition.max_attainable_score();
    if raw <= 0.0 || max <= 0.0 {
        return None;
    }
    let percent = (raw / max * 100.0).round().clamp(0.0, 100.0);
    if percent == 0.0 {
        return None;
    }
    Some(percent as u8)
}
