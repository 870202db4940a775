use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vaidya_core::models::symptom::SymptomCategory;

/// Vaidya - rule-based symptom checker and wellness report generator
#[derive(Parser, Debug)]
#[command(name = "vaidya")]
#[command(version)]
#[command(about = "Match symptoms to likely conditions and suggest Ayurvedic care", long_about = None)]
pub struct Args {
    /// Reference dataset (JSON) to use instead of the built-in one
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List known symptoms
    Symptoms {
        /// Only show one category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// List known conditions
    Conditions,

    /// Analyze an intake request (JSON)
    Analyze {
        /// Path to the request file
        request: PathBuf,

        /// Number of conditions to show (defaults to the configured value)
        #[arg(long)]
        top: Option<usize>,

        /// Print the analysis as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Show treatments for this condition instead of the top match
        #[arg(long)]
        select: Option<String>,

        /// Write a Markdown report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write a DOCX report
        #[arg(long)]
        docx: Option<PathBuf>,
    },

    /// Show treatments for a condition, grouped by category
    Treatments { condition_id: String },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the active configuration
    Show,

    /// Write a fresh configuration file
    Init {
        /// Name printed on reports
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Physical,
    Mental,
    Digestive,
    Respiratory,
    Skin,
}

impl From<CategoryArg> for SymptomCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Physical => SymptomCategory::Physical,
            CategoryArg::Mental => SymptomCategory::Mental,
            CategoryArg::Digestive => SymptomCategory::Digestive,
            CategoryArg::Respiratory => SymptomCategory::Respiratory,
            CategoryArg::Skin => SymptomCategory::Skin,
        }
    }
}
