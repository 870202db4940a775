//! vaidya-export
//!
//! Health report assembly, Markdown rendering (Tera) and DOCX generation.

pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;
