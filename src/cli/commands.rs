//! Command execution for the Crimson converter CLI
//!
//! This module contains the main command logic: logging setup, argument
//! validation, pipeline invocation and the final summary report.

use colored::*;
use tracing::{debug, info};

use crate::app::services::converter::{convert, ConvertStats};
use crate::cli::args::Args;
use crate::Result;

/// Main command runner for the converter
///
/// Orchestrates the workflow: set up logging, validate arguments, build
/// the pipeline configuration, run the conversion and report the result.
pub fn run(args: Args) -> Result<ConvertStats> {
    setup_logging(&args);

    info!("Starting Crimson converter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    config.validate()?;
    debug!("Pipeline configuration: {:?}", config);

    let stats = convert(&config)?;

    if args.show_summary() {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("crimson_converter={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Print the conversion summary block
fn print_summary(stats: &ConvertStats) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.classify.rows_total.to_string().bright_white().bold()
    );
    println!(
        "  {} {} ({} alarm, {} bypass, {} fault)",
        "Tags classified:".bright_cyan(),
        stats
            .classify
            .tags_classified
            .to_string()
            .bright_white()
            .bold(),
        stats.alarm_tags,
        stats.bypass_tags,
        stats.fault_tags
    );
    println!(
        "  {} {}",
        "Flag tags written:".bright_cyan(),
        stats.flags_written.to_string().bright_white().bold()
    );

    if stats.tags_skipped > 0 {
        println!(
            "  {} {}",
            "Tags skipped (no bit address):".bright_yellow(),
            stats.tags_skipped.to_string().bright_white().bold()
        );
    }
    if stats.addresses_malformed > 0 {
        println!(
            "  {} {}",
            "Malformed addresses:".bright_red(),
            stats.addresses_malformed.to_string().bright_red().bold()
        );
    }

    println!(
        "  {} {} ms",
        "Elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white().bold()
    );
}
