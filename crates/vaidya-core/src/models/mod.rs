pub mod analysis;
pub mod condition;
pub mod prediction;
pub mod profile;
pub mod report;
pub mod request;
pub mod session;
pub mod severity;
pub mod symptom;
pub mod treatment;
