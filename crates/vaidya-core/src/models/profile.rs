use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Optional personal context collected at intake. Carried into reports;
/// the predictor does not read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    #[serde(default)]
    pub age: Option<u16>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dietary_habits: Option<DietaryHabits>,
    #[serde(default)]
    pub physical_activity: Option<ActivityLevel>,
    #[serde(default)]
    pub smoking_status: SmokingStatus,
    #[serde(default)]
    pub alcohol_consumption: Option<AlcoholConsumption>,
    #[serde(default)]
    pub chronic_conditions: Option<String>,
    #[serde(default)]
    pub mental_health: Option<String>,
    #[serde(default)]
    pub sleep_pattern: Option<SleepPattern>,
    #[serde(default)]
    pub hydration: Option<Hydration>,
    #[serde(default)]
    pub medical_history: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DietaryHabits {
    Vegetarian,
    Vegan,
    NonVegetarian,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SmokingStatus {
    #[default]
    NonSmoker,
    ExSmoker,
    CurrentSmoker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlcoholConsumption {
    Never,
    Occasional,
    Moderate,
    Frequent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepPattern {
    LessThanSixHours,
    SixToEightHours,
    MoreThanEightHours,
    Irregular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Hydration {
    LessThanOneLitre,
    OneToTwoLitres,
    TwoToThreeLitres,
    MoreThanThreeLitres,
}

impl UserProfile {
    /// Human-readable `(label, value)` pairs for every field that was filled in.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();
        if let Some(age) = self.age {
            lines.push(("Age", age.to_string()));
        }
        if let Some(gender) = self.gender {
            let label = match gender {
                Gender::Male => "Male",
                Gender::Female => "Female",
                Gender::Other => "Other",
            };
            lines.push(("Gender", label.to_string()));
        }
        push_text(&mut lines, "Location", &self.location);
        if let Some(diet) = self.dietary_habits {
            let label = match diet {
                DietaryHabits::Vegetarian => "Vegetarian",
                DietaryHabits::Vegan => "Vegan",
                DietaryHabits::NonVegetarian => "Non-vegetarian",
                DietaryHabits::Mixed => "Mixed",
            };
            lines.push(("Dietary habits", label.to_string()));
        }
        if let Some(activity) = self.physical_activity {
            let label = match activity {
                ActivityLevel::Sedentary => "Sedentary",
                ActivityLevel::Light => "Light exercise",
                ActivityLevel::Moderate => "Moderate exercise",
                ActivityLevel::Active => "Very active",
            };
            lines.push(("Physical activity", label.to_string()));
        }
        let smoking = match self.smoking_status {
            SmokingStatus::NonSmoker => "Non-smoker",
            SmokingStatus::ExSmoker => "Ex-smoker",
            SmokingStatus::CurrentSmoker => "Current smoker",
        };
        lines.push(("Smoking status", smoking.to_string()));
        if let Some(alcohol) = self.alcohol_consumption {
            let label = match alcohol {
                AlcoholConsumption::Never => "Never",
                AlcoholConsumption::Occasional => "Occasional",
                AlcoholConsumption::Moderate => "Moderate",
                AlcoholConsumption::Frequent => "Frequent",
            };
            lines.push(("Alcohol consumption", label.to_string()));
        }
        push_text(&mut lines, "Chronic conditions", &self.chronic_conditions);
        push_text(&mut lines, "Mental health", &self.mental_health);
        if let Some(sleep) = self.sleep_pattern {
            let label = match sleep {
                SleepPattern::LessThanSixHours => "Less than 6 hours",
                SleepPattern::SixToEightHours => "6-8 hours",
                SleepPattern::MoreThanEightHours => "More than 8 hours",
                SleepPattern::Irregular => "Irregular",
            };
            lines.push(("Sleep", label.to_string()));
        }
        if let Some(hydration) = self.hydration {
            let label = match hydration {
                Hydration::LessThanOneLitre => "Less than 1L",
                Hydration::OneToTwoLitres => "1-2 litres",
                Hydration::TwoToThreeLitres => "2-3 litres",
                Hydration::MoreThanThreeLitres => "More than 3L",
            };
            lines.push(("Daily water intake", label.to_string()));
        }
        push_text(&mut lines, "Medical history", &self.medical_history);
        lines
    }
}

fn push_text(lines: &mut Vec<(&'static str, String)>, label: &'static str, value: &Option<String>) {
    if let Some(text) = value.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        lines.push((label, text.to_string()));
    }
}
