use vaidya_core::models::condition::{Condition, SymptomWeight};
use vaidya_core::models::symptom::{Symptom, SymptomCategory};
use vaidya_core::models::treatment::{Treatment, TreatmentCategory};
use vaidya_engine::{DatasetError, ReferenceData};

fn symptom(id: &str, category: SymptomCategory) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: id.to_string(),
        category,
        description: None,
    }
}

fn condition(id: &str, weights: &[(&str, f64)]) -> Condition {
    Condition {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        risk_factors: Vec::new(),
        symptom_weights: weights
            .iter()
            .map(|&(symptom_id, weight)| SymptomWeight {
                symptom_id: symptom_id.to_string(),
                weight,
            })
            .collect(),
    }
}

fn treatment(id: &str, conditions: &[&str]) -> Treatment {
    Treatment {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        category: TreatmentCategory::Lifestyle,
        instructions: None,
        dosage: None,
        duration: None,
        precautions: Vec::new(),
        condition_ids: conditions.iter().map(|c| c.to_string()).collect(),
    }
}

fn symptoms() -> Vec<Symptom> {
    vec![
        symptom("cough", SymptomCategory::Respiratory),
        symptom("anxiety", SymptomCategory::Mental),
        symptom("wheeze", SymptomCategory::Respiratory),
    ]
}

#[test]
fn valid_dataset_supports_lookups() {
    let data = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[("cough", 0.6)])],
        vec![treatment("rest", &["cold"])],
    )
    .unwrap();

    assert_eq!(data.symptom("anxiety").unwrap().category, SymptomCategory::Mental);
    assert!(data.symptom("fever").is_none());
    assert_eq!(data.condition("cold").unwrap().max_attainable_score(), 0.6);
    let respiratory_symptoms = data.symptoms_by_category(SymptomCategory::Respiratory);
    let respiratory: Vec<_> = respiratory_symptoms
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(respiratory, ["cough", "wheeze"]);
    assert!(data.symptoms_by_category(SymptomCategory::Skin).is_empty());
}

#[test]
fn duplicate_symptom_id_is_rejected() {
    let mut list = symptoms();
    list.push(symptom("cough", SymptomCategory::Physical));
    let err = ReferenceData::new(list, Vec::new(), Vec::new()).unwrap_err();
    assert!(matches!(err, DatasetError::DuplicateSymptom(id) if id == "cough"));
}

#[test]
fn duplicate_condition_id_is_rejected() {
    let err = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[]), condition("cold", &[])],
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, DatasetError::DuplicateCondition(id) if id == "cold"));
}

#[test]
fn duplicate_treatment_id_is_rejected() {
    let err = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[])],
        vec![treatment("rest", &["cold"]), treatment("rest", &[])],
    )
    .unwrap_err();
    assert!(matches!(err, DatasetError::DuplicateTreatment(id) if id == "rest"));
}

#[test]
fn weight_outside_unit_interval_is_rejected() {
    for weight in [-0.1, 1.5, f64::NAN] {
        let err = ReferenceData::new(
            symptoms(),
            vec![condition("cold", &[("cough", weight)])],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::WeightOutOfRange { .. }), "weight {weight}");
    }
}

#[test]
fn boundary_weights_are_accepted() {
    ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[("cough", 0.0), ("wheeze", 1.0)])],
        Vec::new(),
    )
    .unwrap();
}

#[test]
fn weight_for_unknown_symptom_is_rejected() {
    let err = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[("sneeze", 0.4)])],
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::UnknownSymptomReference { ref symptom_id, .. } if symptom_id == "sneeze"
    ));
}

#[test]
fn repeated_weight_is_rejected() {
    let err = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[("cough", 0.4), ("cough", 0.6)])],
        Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, DatasetError::DuplicateWeight { .. }));
}

#[test]
fn treatment_for_unknown_condition_is_rejected() {
    let err = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[("cough", 0.4)])],
        vec![treatment("rest", &["cold", "flu"])],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::UnknownConditionReference { ref condition_id, .. } if condition_id == "flu"
    ));
}

#[test]
fn parses_json_dataset() {
    let json = r#"{
        "symptoms": [
            {"id": "cough", "name": "Cough", "category": "respiratory"}
        ],
        "conditions": [
            {
                "id": "cold",
                "name": "Common Cold",
                "description": "Viral infection",
                "symptom_weights": [{"symptom_id": "cough", "weight": 0.7}]
            }
        ]
    }"#;

    let data = ReferenceData::from_json(json).unwrap();
    assert_eq!(data.conditions().len(), 1);
    assert!(data.treatments().is_empty());
    assert!(data.condition("cold").unwrap().risk_factors.is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ReferenceData::from_json("{\"symptoms\": 3}").unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)));
}

#[test]
fn dataset_file_round_trips_through_json() {
    let data = ReferenceData::new(
        symptoms(),
        vec![condition("cold", &[("cough", 0.4)])],
        vec![treatment("rest", &["cold"])],
    )
    .unwrap();

    let json = serde_json::to_string(&data.to_file()).unwrap();
    let reloaded = ReferenceData::from_json(&json).unwrap();
    assert_eq!(reloaded.symptoms(), data.symptoms());
    assert_eq!(reloaded.treatments(), data.treatments());
}
