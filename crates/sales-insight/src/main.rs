//! CLI entry point for the sales analysis.

use anyhow::{Result, anyhow};
use clap::Parser;
use sales_insight::{AnalysisConfig, AnalysisReport, ReportGenerator, run};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory analysis of coffee sales",
    long_about = "Loads a sales CSV, fills missing numeric values with column means, renders \
                  a correlation heatmap plus relational, categorical and statistical charts, \
                  and describes the distribution of the target column.\n\n\
                  Running without arguments reads ./data.csv and writes the charts to the \
                  working directory.\n\n\
                  EXAMPLES:\n  \
                  # Default run\n  \
                  sales-insight\n\n  \
                  # Different input and output directory\n  \
                  sales-insight -i sales/2024.csv -o charts/\n\n  \
                  # Machine-readable result\n  \
                  sales-insight --json | jq .moments"
)]
struct Args {
    /// Path to the CSV file to analyse
    #[arg(short, long, default_value = "data.csv")]
    input: String,

    /// Output directory for the chart images
    #[arg(short, long, default_value = ".")]
    output: String,

    /// Numeric column whose moments are reported
    #[arg(short, long, default_value = "money")]
    column: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and results)
    #[arg(short, long)]
    quiet: bool,

    /// Output the report as JSON to stdout instead of the printed summaries
    ///
    /// Disables all logs and console diagnostics; only the JSON report is
    /// written to stdout.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to the output directory
    ///
    /// The report will be saved as analysis_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = AnalysisConfig::builder()
        .input_path(&args.input)
        .output_dir(&args.output)
        .target_column(&args.column)
        .print_diagnostics(!args.json)
        .print_interpretation(!args.json)
        .build()?;

    let report = run(&config).map_err(|e| anyhow!("Analysis failed: {}", e))?;
    handle_output(&report, &args)
}

/// Handle the finished report based on CLI flags.
///
/// Output behavior:
/// - Default: the diagnostics and interpretation were already printed
/// - `--json`: Print JSON to stdout only (no logs)
/// - `--emit-report`: Write JSON report to file
fn handle_output(report: &AnalysisReport, args: &Args) -> Result<()> {
    if args.json {
        println!("{}", ReportGenerator::to_json(report)?);
    }

    if args.emit_report {
        let generator = ReportGenerator::new(std::path::PathBuf::from(&args.output));
        let report_path = generator.write_report_to_file(report)?;
        info!("Report written to: {}", report_path.display());
    }

    Ok(())
}
