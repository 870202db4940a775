//! Built-in Ayurvedic wellness dataset.
//!
//! Goes through the same validating constructor as any injected dataset, so
//! a typo in an id here surfaces as a [`DatasetError`] rather than a
//! silently unreachable condition.

pub mod conditions;
pub mod symptoms;
pub mod treatments;

use crate::dataset::ReferenceData;
use crate::error::DatasetError;

/// Return a fresh copy of the built-in reference data.
pub fn reference_data() -> Result<ReferenceData, DatasetError> {
    ReferenceData::new(symptoms::all(), conditions::all(), treatments::all())
}
