//! vaidya-engine
//!
//! Symptom-to-condition scoring and treatment lookup. Pure functions over an
//! injected, validated [`ReferenceData`] set: no I/O, no shared state.

pub mod analysis;
pub mod builtin;
pub mod dataset;
pub mod error;
pub mod predict;
pub mod resolve;

pub use analysis::{analyze, select};
pub use dataset::ReferenceData;
pub use error::{DatasetError, EngineError};
pub use predict::predict;
pub use resolve::{group_by_category, treatments_for};
