use anyhow::Context;
use clap::Parser;
use lifespan_census::utils::error::ErrorSeverity;
use lifespan_census::utils::logger;
use lifespan_census::{CensusEngine, CensusError, CensusReport, CliConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting lifespan-census");
    tracing::debug!("CLI config: {:?}", config);

    let source = match config.dataset_source() {
        Ok(source) => source,
        Err(e) => exit_with(&e),
    };
    let engine = CensusEngine::with_options(source, config.census_options());

    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    match config.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to encode the report")?
        ),
    }

    Ok(())
}

fn exit_with(e: &CensusError) -> ! {
    tracing::error!("{} (severity: {:?})", e, e.severity());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn render_text(report: &CensusReport) -> String {
    let mut out = format!(
        "Dataset '{}': {} individuals\n",
        report.dataset, report.individuals
    );

    if report.decrease_years.is_empty() {
        out.push_str("The population never decreased\n");
    } else {
        out.push_str("Years the population decreased:\n");
        for year in &report.decrease_years {
            out.push_str(&format!("  {}\n", year));
        }
    }

    if !report.year_counts.is_empty() {
        out.push_str("Population by requested year:\n");
        for count in &report.year_counts {
            out.push_str(&format!("  {}: {}\n", count.year, count.population));
        }
    }

    if !report.timeline.is_empty() {
        out.push_str("Timeline:\n");
        for count in &report.timeline {
            out.push_str(&format!("  {}: {}\n", count.year, count.population));
        }
    }

    out
}
