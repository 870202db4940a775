use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Reported intensity of a symptom, 1 (Mild) through 5 (Extreme).
///
/// Always in range: the only way in is [`Severity::new`] (or serde, which
/// goes through the same check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct Severity(u8);

impl Severity {
    pub const MILD: Severity = Severity(1);
    pub const MODERATE: Severity = Severity(2);
    pub const SIGNIFICANT: Severity = Severity(3);
    pub const SEVERE: Severity = Severity(4);
    pub const EXTREME: Severity = Severity(5);

    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Severity(value))
        } else {
            Err(CoreError::InvalidSeverity(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Mild",
            2 => "Moderate",
            3 => "Significant",
            4 => "Severe",
            _ => "Extreme",
        }
    }
}

/// Callers that omit a severity get "Significant".
impl Default for Severity {
    fn default() -> Self {
        Severity::SIGNIFICANT
    }
}

impl TryFrom<u8> for Severity {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Severity::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.0)
    }
}
