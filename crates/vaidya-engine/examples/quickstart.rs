//! Rank conditions for a handful of symptoms against the built-in dataset.
//!
//! cargo run -p vaidya-engine --example quickstart

use vaidya_core::models::request::{AnalysisRequest, SymptomDetail};
use vaidya_core::models::severity::Severity;
use vaidya_engine::{analyze, builtin, group_by_category};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = builtin::reference_data()?;
    let request = AnalysisRequest::new(vec![
        SymptomDetail::new("headache").with_severity(Severity::SEVERE),
        SymptomDetail::new("nausea"),
        SymptomDetail::new("insomnia").with_severity(Severity::MODERATE),
    ]);

    let analysis = analyze(&data, &request)?;
    for prediction in &analysis.predictions {
        println!(
            "{:<32} {:>3}% ({})",
            prediction.condition.name,
            prediction.confidence,
            prediction.level().label()
        );
    }

    if let Some(selected) = &analysis.selected {
        println!("\nTreatments for {}:", selected.condition_id);
        for (category, treatments) in group_by_category(&selected.treatments) {
            println!("  {category}");
            for treatment in treatments {
                println!("    - {}", treatment.name);
            }
        }
    }
    Ok(())
}
