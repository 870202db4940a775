use serde::{Deserialize, Serialize};

/// Document styling for exported health reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings (e.g. "Georgia").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Footer (disclaimer) font size in points.
    pub footer_size: usize,

    /// Page margin in inches, applied uniformly.
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Georgia".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
            footer_size: 8,
            margin_inches: 0.8,
        }
    }
}

impl DocumentStyles {
    /// Margin in twentieths of a point, the unit OOXML page margins use.
    pub fn margin_twips(&self) -> i32 {
        (self.margin_inches * 1440.0).round() as i32
    }
}
