use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::info;
use vaidya_core::models::analysis::Analysis;
use vaidya_core::models::report::DISCLAIMER;
use vaidya_core::models::request::AnalysisRequest;
use vaidya_core::models::session::{SessionContext, SessionUser};
use vaidya_core::models::symptom::SymptomCategory;
use vaidya_core::models::treatment::Treatment;
use vaidya_engine::{analyze, builtin, group_by_category, select, treatments_for, ReferenceData};
use vaidya_export::docx::generate_docx;
use vaidya_export::render::render_markdown;
use vaidya_export::report::build_report;

use crate::args::{Args, Command, ConfigAction};
use crate::config::{self, VaidyaConfig};

pub fn run(args: Args) -> Result<()> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    match args.command {
        Command::Config { action } => run_config(&action, &config_path),
        command => {
            let config = config::load_or_default(&config_path)?;
            let dataset_path = args.dataset.as_deref().or(config.dataset_path.as_deref());
            let data = load_dataset(dataset_path)?;
            run_with_data(command, &config, &config_path, &data)
        }
    }
}

fn run_with_data(
    command: Command,
    config: &VaidyaConfig,
    config_path: &Path,
    data: &ReferenceData,
) -> Result<()> {
    match command {
        Command::Symptoms { category } => {
            print!("{}", list_symptoms(data, category.map(Into::into)));
        }
        Command::Conditions => print!("{}", list_conditions(data)),
        Command::Analyze {
            request,
            top,
            json,
            select: chosen,
            report,
            docx,
        } => {
            let request = read_request(&request)?;
            let mut analysis = analyze(data, &request)?;
            if let Some(condition_id) = chosen {
                analysis = select(data, &analysis, &condition_id)?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                let limit = top.unwrap_or(config.max_results);
                print!("{}", format_analysis(data, &analysis, limit));
            }

            let outputs = ReportOutputs {
                markdown: report.map(|p| config.report_path(&p)),
                docx: docx.map(|p| config.report_path(&p)),
            };
            write_reports(data, &request, &analysis, config, &outputs)?;
        }
        Command::Treatments { condition_id } => {
            print!("{}", format_treatments(data, &condition_id)?);
        }
        Command::Config { action } => return run_config(&action, config_path),
    }

    Ok(())
}

fn run_config(action: &ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = config::load_or_default(path)?;
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { name, force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                ));
            }
            let mut config = VaidyaConfig::new(jiff::Timestamp::now());
            config.user = name.as_ref().map(SessionUser::new);
            config::save_config(&config, path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Load the dataset at `path`, or the built-in one.
pub fn load_dataset(path: Option<&Path>) -> Result<ReferenceData> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read dataset at {}", path.display()))?;
            let data = ReferenceData::from_json(&json)?;
            info!(path = %path.display(), conditions = data.conditions().len(), "loaded dataset");
            Ok(data)
        }
        None => Ok(builtin::reference_data()?),
    }
}

pub fn read_request(path: &Path) -> Result<AnalysisRequest> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read request at {}", path.display()))?;
    let request = AnalysisRequest::from_json(&json)
        .wrap_err_with(|| format!("invalid request in {}", path.display()))?;
    Ok(request)
}

pub fn list_symptoms(data: &ReferenceData, category: Option<SymptomCategory>) -> String {
    let categories: Vec<SymptomCategory> = match category {
        Some(category) => vec![category],
        None => SymptomCategory::ALL.to_vec(),
    };

    let mut out = String::new();
    for category in categories {
        let symptoms = data.symptoms_by_category(category);
        if symptoms.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{category} Symptoms");
        for symptom in symptoms {
            match &symptom.description {
                Some(description) => {
                    let _ = writeln!(out, "  {:<22} {} - {}", symptom.id, symptom.name, description);
                }
                None => {
                    let _ = writeln!(out, "  {:<22} {}", symptom.id, symptom.name);
                }
            }
        }
    }
    out
}

pub fn list_conditions(data: &ReferenceData) -> String {
    let mut out = String::new();
    for condition in data.conditions() {
        let _ = writeln!(out, "{:<20} {}", condition.id, condition.name);
    }
    out
}

pub fn format_analysis(data: &ReferenceData, analysis: &Analysis, limit: usize) -> String {
    let mut out = String::new();
    if analysis.is_empty() {
        let _ = writeln!(
            out,
            "No matches found. Please add more symptoms or consult a healthcare professional."
        );
        return out;
    }

    let _ = writeln!(out, "Possible conditions:");
    for prediction in analysis.predictions.iter().take(limit) {
        let _ = writeln!(
            out,
            "  {:<32} {:>3}%  {}",
            prediction.condition.name,
            prediction.confidence,
            prediction.level().label()
        );
    }
    let hidden = analysis.predictions.len().saturating_sub(limit);
    if hidden > 0 {
        let _ = writeln!(out, "  ... and {hidden} more");
    }

    if let Some(selected) = &analysis.selected {
        let name = data
            .condition(&selected.condition_id)
            .map(|c| c.name.as_str())
            .unwrap_or(selected.condition_id.as_str());
        let _ = writeln!(out, "\nRecommended care for {name}:");
        write_treatment_groups(&mut out, &selected.treatments);
    }

    let _ = writeln!(out, "\n{DISCLAIMER}");
    out
}

pub fn format_treatments(data: &ReferenceData, condition_id: &str) -> Result<String> {
    let treatments = treatments_for(data, condition_id)?;
    let mut out = String::new();
    write_treatment_groups(&mut out, &treatments);
    Ok(out)
}

fn write_treatment_groups(out: &mut String, treatments: &[Treatment]) {
    if treatments.is_empty() {
        let _ = writeln!(out, "  No specific treatments found for this condition.");
        return;
    }
    for (category, group) in group_by_category(treatments) {
        let _ = writeln!(out, "  {category}");
        for treatment in group {
            let _ = writeln!(out, "    - {}: {}", treatment.name, treatment.description);
            if let Some(dosage) = &treatment.dosage {
                let _ = writeln!(out, "      dosage: {dosage}");
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportOutputs {
    pub markdown: Option<PathBuf>,
    pub docx: Option<PathBuf>,
}

/// Render the requested report files. Does nothing when no output was asked
/// for.
pub fn write_reports(
    data: &ReferenceData,
    request: &AnalysisRequest,
    analysis: &Analysis,
    config: &VaidyaConfig,
    outputs: &ReportOutputs,
) -> Result<()> {
    if outputs.markdown.is_none() && outputs.docx.is_none() {
        return Ok(());
    }

    let session: SessionContext = config.session();
    let report = build_report(data, request, analysis, &session, jiff::Timestamp::now())?;
    let markdown = render_markdown(&report)?;

    if let Some(path) = &outputs.markdown {
        write_file(path, markdown.as_bytes())?;
        info!(path = %path.display(), "markdown report written");
    }
    if let Some(path) = &outputs.docx {
        let bytes = generate_docx(&markdown, &report.disclaimer, &config.styles)?;
        write_file(path, &bytes)?;
        info!(path = %path.display(), "docx report written");
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, bytes).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
