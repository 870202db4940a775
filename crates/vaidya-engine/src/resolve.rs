use std::collections::BTreeMap;

use tracing::debug;
use vaidya_core::models::treatment::{Treatment, TreatmentCategory};

use crate::dataset::ReferenceData;
use crate::error::EngineError;

/// Treatments associated with `condition_id`, in dataset order.
///
/// A known condition with nothing mapped to it yields an empty vector; only
/// an id missing from the dataset is an error.
pub fn treatments_for(
    data: &ReferenceData,
    condition_id: &str,
) -> Result<Vec<Treatment>, EngineError> {
    if data.condition(condition_id).is_none() {
        return Err(EngineError::UnknownCondition(condition_id.to_string()));
    }

    let treatments: Vec<Treatment> = data
        .treatments()
        .iter()
        .filter(|t| t.applies_to(condition_id))
        .cloned()
        .collect();

    debug!(condition_id, count = treatments.len(), "resolved treatments");
    Ok(treatments)
}

/// Group treatments for display. Categories come out in declaration order;
/// within a category the input order is kept.
pub fn group_by_category(treatments: &[Treatment]) -> BTreeMap<TreatmentCategory, Vec<&Treatment>> {
    let mut groups: BTreeMap<TreatmentCategory, Vec<&Treatment>> = BTreeMap::new();
    for treatment in treatments {
        groups.entry(treatment.category).or_default().push(treatment);
    }
    groups
}
