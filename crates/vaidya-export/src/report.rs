use tracing::info;
use vaidya_core::models::analysis::Analysis;
use vaidya_core::models::report::{
    HealthReport, ProfileLine, ReportCondition, ReportPrediction, ReportTreatment, ReportedSymptom,
    TreatmentGroup, DISCLAIMER, NO_MATCHES,
};
use vaidya_core::models::request::AnalysisRequest;
use vaidya_core::models::session::SessionContext;
use vaidya_engine::{group_by_category, ReferenceData};

use crate::error::ExportError;

pub const REPORT_TITLE: &str = "Vaidya Health Report";

/// Assemble the report for one analysis. Names and descriptions are looked
/// up in `data`, which must be the dataset the analysis ran against.
pub fn build_report(
    data: &ReferenceData,
    request: &AnalysisRequest,
    analysis: &Analysis,
    session: &SessionContext,
    generated_at: jiff::Timestamp,
) -> Result<HealthReport, ExportError> {
    let symptoms = request
        .symptoms
        .iter()
        .map(|detail| {
            let symptom = data
                .symptom(&detail.symptom_id)
                .ok_or_else(|| ExportError::MissingReference(detail.symptom_id.clone()))?;
            Ok(ReportedSymptom {
                name: symptom.name.clone(),
                category: symptom.category.label().to_string(),
                severity: detail.severity.label().to_string(),
                duration: format!("{} {}", detail.duration_value, detail.duration_unit.label()),
                frequency: detail.frequency.label().to_string(),
                notes: detail.notes.as_deref().map(single_line).filter(|n| !n.is_empty()),
            })
        })
        .collect::<Result<Vec<_>, ExportError>>()?;

    let profile: Vec<ProfileLine> = request
        .profile
        .as_ref()
        .map(|p| {
            p.summary()
                .into_iter()
                .map(|(label, value)| ProfileLine {
                    label: label.to_string(),
                    value,
                })
                .collect()
        })
        .unwrap_or_default();

    let predictions: Vec<ReportPrediction> = analysis
        .predictions
        .iter()
        .map(|p| {
            let level = p.level();
            ReportPrediction {
                condition_id: p.condition.id.clone(),
                name: p.condition.name.clone(),
                confidence: p.confidence,
                level,
                level_label: level.label().to_string(),
            }
        })
        .collect();

    let selected = match &analysis.selected {
        Some(selected) => {
            let condition = data
                .condition(&selected.condition_id)
                .ok_or_else(|| ExportError::MissingReference(selected.condition_id.clone()))?;
            let treatment_groups: Vec<TreatmentGroup> = group_by_category(&selected.treatments)
                .into_iter()
                .map(|(category, treatments)| TreatmentGroup {
                    category: category.label().to_string(),
                    treatments: treatments
                        .into_iter()
                        .map(|t| ReportTreatment {
                            name: t.name.clone(),
                            description: t.description.clone(),
                            instructions: t.instructions.clone(),
                            dosage: t.dosage.clone(),
                            duration: t.duration.clone(),
                            precautions: t.precautions.clone(),
                        })
                        .collect(),
                })
                .collect();
            Some(ReportCondition {
                name: condition.name.clone(),
                description: condition.description.clone(),
                risk_factors: condition.risk_factors.clone(),
                treatment_groups,
            })
        }
        None => None,
    };

    info!(
        symptoms = symptoms.len(),
        predictions = analysis.predictions.len(),
        authenticated = session.is_authenticated(),
        "built health report"
    );

    Ok(HealthReport {
        title: REPORT_TITLE.to_string(),
        generated_at,
        prepared_for: session.display_name().map(str::to_string),
        symptoms,
        profile,
        predictions,
        selected,
        no_matches: analysis.is_empty().then(|| NO_MATCHES.to_string()),
        disclaimer: DISCLAIMER.to_string(),
    })
}

/// Collapse free text onto one line so it stays inside its bullet when the
/// Markdown is rendered or converted to DOCX.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
