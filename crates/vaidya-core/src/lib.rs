//! vaidya-core
//!
//! Pure domain types shared by the engine, the exporters and any front-end.
//! No scoring logic lives here. This is the vocabulary of the Vaidya system.

pub mod error;
pub mod models;
