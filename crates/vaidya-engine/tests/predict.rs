use std::collections::{BTreeMap, BTreeSet};

use vaidya_core::models::condition::{Condition, SymptomWeight};
use vaidya_core::models::severity::Severity;
use vaidya_core::models::symptom::{Symptom, SymptomCategory};
use vaidya_engine::predict::severity_factor;
use vaidya_engine::{predict, EngineError, ReferenceData};

fn symptom(id: &str) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: id.to_string(),
        category: SymptomCategory::Physical,
        description: None,
    }
}

fn condition(id: &str, weights: &[(&str, f64)]) -> Condition {
    Condition {
        id: id.to_string(),
        name: id.to_uppercase(),
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

fn fixture() -> ReferenceData {
    ReferenceData::new(
        vec![symptom("fatigue"), symptom("headache"), symptom("rash")],
        vec![
            condition("C1", &[("fatigue", 0.8)]),
            condition("C2", &[("headache", 0.5)]),
            condition("C3", &[("fatigue", 0.0), ("headache", 0.6)]),
        ],
        Vec::new(),
    )
    .unwrap()
}

fn ids(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn severities(items: &[(&str, u8)]) -> BTreeMap<String, Severity> {
    items
        .iter()
        .map(|&(id, value)| (id.to_string(), Severity::new(value).unwrap()))
        .collect()
}

#[test]
fn single_fully_weighted_symptom_scores_one_hundred() {
    let data = fixture();
    let results = predict(&data, &ids(&["fatigue"]), &severities(&[("fatigue", 5)])).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].condition.id, "C1");
    assert_eq!(results[0].confidence, 100);
}

#[test]
fn zero_weight_association_is_excluded() {
    let data = fixture();
    let results = predict(&data, &ids(&["fatigue"]), &severities(&[("fatigue", 5)])).unwrap();
    assert!(results.iter().all(|r| r.condition.id != "C3"));
}

#[test]
fn no_overlap_returns_empty() {
    let data = fixture();
    let results = predict(&data, &ids(&["rash"]), &severities(&[("rash", 4)])).unwrap();
    assert!(results.is_empty());
}

#[test]
fn confidence_rounding_to_zero_is_excluded() {
    let data = ReferenceData::new(
        vec![symptom("fatigue"), symptom("headache")],
        vec![
            condition("faint", &[("fatigue", 0.01), ("headache", 1.0)]),
            condition("visible", &[("fatigue", 0.05), ("headache", 0.9)]),
        ],
        Vec::new(),
    )
    .unwrap();

    // faint: 0.002 / 1.01 rounds to 0%. visible: 0.01 / 0.95 rounds to 1%.
    let results = predict(&data, &ids(&["fatigue"]), &severities(&[("fatigue", 1)])).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].condition.id, "visible");
    assert_eq!(results[0].confidence, 1);
}

#[test]
fn empty_input_is_rejected() {
    let data = fixture();
    let err = predict(&data, &BTreeSet::new(), &BTreeMap::new()).unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput));
}

#[test]
fn unknown_symptom_is_rejected() {
    let data = fixture();
    let err = predict(&data, &ids(&["fatigue", "vertigo"]), &BTreeMap::new()).unwrap_err();
    match err {
        EngineError::UnknownSymptom(id) => assert_eq!(id, "vertigo"),
        other => panic!("expected UnknownSymptom, got {other:?}"),
    }
}

#[test]
fn missing_severity_behaves_like_significant() {
    let data = fixture();
    let selected = ids(&["fatigue", "headache"]);

    let filled = predict(&data, &selected, &severities(&[("headache", 5)])).unwrap();
    let explicit = predict(
        &data,
        &selected,
        &severities(&[("fatigue", 3), ("headache", 5)]),
    )
    .unwrap();

    assert_eq!(filled, explicit);
    let c1 = filled.iter().find(|r| r.condition.id == "C1").unwrap();
    assert_eq!(c1.confidence, 60);
}

#[test]
fn severities_for_unselected_symptoms_are_ignored() {
    let data = fixture();
    let results = predict(
        &data,
        &ids(&["fatigue"]),
        &severities(&[("fatigue", 5), ("headache", 5)]),
    )
    .unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn confidence_is_rounded_fraction_of_attainable_score() {
    let data = ReferenceData::new(
        vec![symptom("fatigue"), symptom("headache")],
        vec![condition("both", &[("fatigue", 1.0), ("headache", 1.0)])],
        Vec::new(),
    )
    .unwrap();

    // 0.2 of 2.0 attainable
    let results = predict(&data, &ids(&["fatigue"]), &severities(&[("fatigue", 1)])).unwrap();
    assert_eq!(results[0].confidence, 10);

    // (0.8 + 0.6) of 2.0 attainable
    let results = predict(
        &data,
        &ids(&["fatigue", "headache"]),
        &severities(&[("fatigue", 4), ("headache", 3)]),
    )
    .unwrap();
    assert_eq!(results[0].confidence, 70);
}

#[test]
fn ties_break_on_condition_id() {
    let data = ReferenceData::new(
        vec![symptom("fatigue")],
        vec![
            condition("zeta", &[("fatigue", 0.5)]),
            condition("alpha", &[("fatigue", 0.9)]),
            condition("mu", &[("fatigue", 0.3)]),
        ],
        Vec::new(),
    )
    .unwrap();

    let results = predict(&data, &ids(&["fatigue"]), &severities(&[("fatigue", 2)])).unwrap();
    let order: Vec<_> = results.iter().map(|r| r.condition.id.as_str()).collect();
    assert_eq!(order, ["alpha", "mu", "zeta"]);
    assert!(results.iter().all(|r| r.confidence == 40));
}

#[test]
fn results_sorted_by_descending_confidence() {
    let data = ReferenceData::new(
        vec![symptom("fatigue"), symptom("headache")],
        vec![
            condition("a", &[("fatigue", 0.2), ("headache", 0.8)]),
            condition("b", &[("fatigue", 0.9), ("headache", 0.1)]),
            condition("c", &[("fatigue", 0.5), ("headache", 0.5)]),
        ],
        Vec::new(),
    )
    .unwrap();

    let results = predict(
        &data,
        &ids(&["fatigue", "headache"]),
        &severities(&[("fatigue", 5), ("headache", 1)]),
    )
    .unwrap();
    let order: Vec<_> = results.iter().map(|r| (r.condition.id.as_str(), r.confidence)).collect();
    assert_eq!(order, [("b", 92), ("c", 60), ("a", 36)]);
}

#[test]
fn repeated_calls_are_identical() {
    let data = fixture();
    let selected = ids(&["fatigue", "headache"]);
    let sev = severities(&[("fatigue", 2), ("headache", 4)]);

    let first = serde_json::to_string(&predict(&data, &selected, &sev).unwrap()).unwrap();
    let second = serde_json::to_string(&predict(&data, &selected, &sev).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn severity_factor_is_linear_and_increasing() {
    let factors: Vec<f64> = (1..=5u8)
        .map(|v| severity_factor(Severity::new(v).unwrap()))
        .collect();
    assert_eq!(factors, [0.2, 0.4, 0.6, 0.8, 1.0]);
}
