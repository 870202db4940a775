use vaidya_core::models::analysis::Analysis;
use vaidya_core::models::prediction::ConfidenceLevel;
use vaidya_core::models::profile::{SleepPattern, UserProfile};
use vaidya_core::models::report::{DISCLAIMER, NO_MATCHES};
use vaidya_core::models::request::{AnalysisRequest, DurationUnit, Frequency, SymptomDetail};
use vaidya_core::models::session::{SessionContext, SessionUser};
use vaidya_core::models::severity::Severity;
use vaidya_engine::{analyze, builtin, ReferenceData};
use vaidya_export::error::ExportError;
use vaidya_export::render::{render_markdown, render_template};
use vaidya_export::report::build_report;

fn generated_at() -> jiff::Timestamp {
    "2026-03-14T09:30:00Z".parse().unwrap()
}

fn cold_request() -> AnalysisRequest {
    AnalysisRequest::new(vec![
        SymptomDetail::new("nasal_congestion")
            .with_severity(Severity::EXTREME)
            .with_duration(3, DurationUnit::Days)
            .with_frequency(Frequency::Constantly),
        SymptomDetail::new("sore_throat")
            .with_severity(Severity::SEVERE)
            .with_notes("worse in the morning"),
        SymptomDetail::new("cough"),
    ])
}

fn data() -> ReferenceData {
    builtin::reference_data().unwrap()
}

#[test]
fn report_lists_symptoms_with_labels() {
    let data = data();
    let request = cold_request();
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    assert_eq!(report.symptoms.len(), 3);
    let congestion = &report.symptoms[0];
    assert_eq!(congestion.name, "Nasal Congestion");
    assert_eq!(congestion.category, "Respiratory");
    assert_eq!(congestion.severity, "Extreme");
    assert_eq!(congestion.duration, "3 days");
    assert_eq!(congestion.frequency, "Constantly (throughout the day)");
    assert_eq!(report.symptoms[1].notes.as_deref(), Some("worse in the morning"));
    assert!(report.prepared_for.is_none());
    assert!(report.no_matches.is_none());
    assert_eq!(report.disclaimer, DISCLAIMER);
}

#[test]
fn report_carries_predictions_and_grouped_treatments() {
    let data = data();
    let request = cold_request();
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    let top = &report.predictions[0];
    assert_eq!(top.condition_id, "common_cold");
    assert_eq!(top.confidence, 55);
    assert_eq!(top.level, ConfidenceLevel::Moderate);

    let selected = report.selected.unwrap();
    assert_eq!(selected.name, "Common Cold (Pratishyaya)");
    let categories: Vec<_> = selected
        .treatment_groups
        .iter()
        .map(|g| g.category.as_str())
        .collect();
    assert_eq!(
        categories,
        ["Herbal Remedies", "Dietary Changes", "Therapeutic Procedures"]
    );
    assert_eq!(selected.treatment_groups[0].treatments.len(), 2);
}

#[test]
fn authenticated_session_names_the_reader() {
    let data = data();
    let request = cold_request().with_profile(UserProfile {
        age: Some(34),
        sleep_pattern: Some(SleepPattern::Irregular),
        ..UserProfile::default()
    });
    let analysis = analyze(&data, &request).unwrap();
    let session = SessionContext::authenticated(SessionUser::new("Meera"));

    let report = build_report(&data, &request, &analysis, &session, generated_at()).unwrap();
    assert_eq!(report.prepared_for.as_deref(), Some("Meera"));
    assert!(report.profile.iter().any(|l| l.label == "Sleep" && l.value == "Irregular"));

    let markdown = render_markdown(&report).unwrap();
    assert!(markdown.contains("Prepared for: **Meera**"));
    assert!(markdown.contains("## Personal Information"));
    assert!(markdown.contains("- **Age:** 34"));
}

#[test]
fn markdown_contains_every_section() {
    let data = data();
    let request = cold_request();
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    let markdown = render_markdown(&report).unwrap();
    assert!(markdown.starts_with("# Vaidya Health Report"));
    assert!(markdown.contains("Generated on: 2026-03-14T09:30:00Z"));
    assert!(markdown.contains(&format!("> {DISCLAIMER}")));
    assert!(markdown.contains("- **Sore Throat** (Respiratory): Severe, for 1 days"));
    assert!(markdown.contains("Notes: worse in the morning"));
    assert!(markdown.contains("- **Common Cold (Pratishyaya)**: Moderate (55%)"));
    assert!(markdown.contains("### Herbal Remedies"));
    assert!(markdown.contains("**Tulsi & Ginger Tea**"));
    assert!(markdown.contains("- **Dosage:** 1 cup, three times a day"));
    assert!(markdown.contains("- **Precaution:** Reduce ginger if prone to acidity"));
    assert!(!markdown.contains("Personal Information"));
    assert!(!markdown.contains("Prepared for"));
}

#[test]
fn empty_analysis_renders_no_matches() {
    let data = data();
    let request = AnalysisRequest::new(vec![SymptomDetail::new("fatigue")]);
    let analysis = Analysis {
        predictions: Vec::new(),
        selected: None,
    };

    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();
    assert_eq!(report.no_matches.as_deref(), Some(NO_MATCHES));

    let markdown = render_markdown(&report).unwrap();
    assert!(markdown.contains("**No matches found.**"));
    assert!(!markdown.contains("## Recommended Treatments"));
}

#[test]
fn selected_condition_without_treatments_says_so() {
    let data = data();
    let request = AnalysisRequest::new(vec![
        SymptomDetail::new("low_mood").with_severity(Severity::EXTREME),
    ]);
    let analysis = analyze(&data, &request).unwrap();
    assert_eq!(analysis.top().unwrap().condition.id, "depressive_episode");

    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();
    let markdown = render_markdown(&report).unwrap();
    assert!(markdown.contains("No specific treatments found for this condition."));
}

#[test]
fn unknown_symptom_in_request_is_reported() {
    let data = data();
    let request = AnalysisRequest::new(vec![SymptomDetail::new("moonburn")]);
    let analysis = Analysis {
        predictions: Vec::new(),
        selected: None,
    };

    let err = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::MissingReference(id) if id == "moonburn"));
}

#[test]
fn custom_template_sees_report_fields() {
    let data = data();
    let request = cold_request();
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    let rendered = render_template(
        "summary.txt",
        "{{ predictions | length }} matches, top {{ predictions.0.name }}",
        &report,
    )
    .unwrap();
    assert_eq!(rendered, "3 matches, top Common Cold (Pratishyaya)");
}

#[test]
fn broken_template_is_a_parse_error() {
    let data = data();
    let request = cold_request();
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    let err = render_template("broken", "{% if title %}unterminated", &report).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn multiline_notes_stay_inside_their_bullet() {
    let data = data();
    let request = AnalysisRequest::new(vec![
        SymptomDetail::new("cough").with_notes("dry at night\n# Heading\n- bullet\n---\n  "),
    ]);
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    assert_eq!(
        report.symptoms[0].notes.as_deref(),
        Some("dry at night # Heading - bullet ---")
    );

    let markdown = render_markdown(&report).unwrap();
    assert!(markdown.lines().all(|line| line != "# Heading" && line != "- bullet"));
    assert!(markdown.contains("Notes: dry at night # Heading - bullet ---"));
}

#[test]
fn whitespace_only_notes_are_dropped() {
    let data = data();
    let request = AnalysisRequest::new(vec![SymptomDetail::new("cough").with_notes(" \n\t ")]);
    let analysis = analyze(&data, &request).unwrap();
    let report = build_report(
        &data,
        &request,
        &analysis,
        &SessionContext::anonymous(),
        generated_at(),
    )
    .unwrap();

    assert!(report.symptoms[0].notes.is_none());
}
