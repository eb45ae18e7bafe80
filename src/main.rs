//! sheetsql - Export game-data sheets as PostgreSQL statements

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sheetsql::config::{ExportConfig, DEFAULT_OUTPUT};
use sheetsql::export::Exporter;
use sheetsql::output::{render_summary, FileSink};
use sheetsql::parser::ParserFactory;

/// Export game-data sheets as PostgreSQL schema and associated imports
#[derive(Parser, Debug)]
#[command(name = "sheetsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Game-data document to export
    input: PathBuf,

    /// Destination of the SQL file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip sheets whose name contains any of these (comma-separated)
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Print a table of exported sheets
    #[arg(long)]
    summary: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = ExportConfig::new(cli.input)
        .with_output(cli.output)
        .with_exclude_patterns(cli.exclude)
        .with_summary(cli.summary)
        .with_verbose(cli.verbose);

    init_logging(&config);

    let data = ParserFactory::new()
        .parse(&config.input)
        .with_context(|| format!("Failed to load game data: {}", config.input.display()))?;

    let mut sink = FileSink::new(&config.output);
    let summary = Exporter::from_config(&config)
        .export(&data, &mut sink)
        .context("Export failed")?;

    tracing::info!(
        output = %config.output.display(),
        sheets = summary.sheets.len(),
        rows = summary.total_rows(),
        "export complete"
    );

    if config.summary {
        render_summary(&summary, &mut std::io::stdout())?;
    }

    Ok(())
}

fn init_logging(config: &ExportConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
