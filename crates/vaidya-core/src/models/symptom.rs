use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Grouping used by intake screens to tab through symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomCategory {
    Physical,
    Mental,
    Digestive,
    Respiratory,
    Skin,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 5] = [
        SymptomCategory::Physical,
        SymptomCategory::Mental,
        SymptomCategory::Digestive,
        SymptomCategory::Respiratory,
        SymptomCategory::Skin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SymptomCategory::Physical => "Physical",
            SymptomCategory::Mental => "Mental",
            SymptomCategory::Digestive => "Digestive",
            SymptomCategory::Respiratory => "Respiratory",
            SymptomCategory::Skin => "Skin",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An atomic reported health indicator. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub category: SymptomCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
