use clap::Parser;
use eyre::Result;
use vaidya_cli::args::Args;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so `analyze --json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    vaidya_cli::commands::run(args)
}
