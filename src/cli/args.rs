//! Command-line argument definitions for the Crimson converter
//!
//! This module defines the CLI interface using the clap derive API. The
//! tool is single-purpose, so there are no subcommands: an input export,
//! an output path and an optional PLC label.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_PLC_LABEL;
use crate::{Config, Error, Result};

/// CLI arguments for the Crimson converter
///
/// Batch-converts a CSV export from the RSLogix 5000 tag scheme into a
/// flag tag import file for Red Lion Crimson edge controllers.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crimson_converter",
    version,
    about = "Convert RSLogix 5000 notification tag exports into Crimson flag tag import files",
    long_about = "Batch-converts CSV export data from the RSLogix 5000 tag scheme into a flag \
                  tag import file for Red Lion Crimson edge controllers. Alarm, Bypass and \
                  Fault notification tags are decoded from their PLC bit addresses; rows that \
                  do not describe a convertible notification point are filtered out."
)]
pub struct Args {
    /// RSLogix export CSV file to open
    #[arg(
        short = 'o',
        long = "open",
        value_name = "FILE",
        help = "RSLogix export CSV file to be opened, including complete file path"
    )]
    pub open: PathBuf,

    /// Crimson import CSV file to save
    #[arg(
        short = 's',
        long = "save",
        value_name = "FILE",
        help = "Crimson import CSV file to be saved, including complete file path"
    )]
    pub save: PathBuf,

    /// PLC label used in Crimson's addressing scheme
    #[arg(
        short = 'p',
        long = "plc-label",
        value_name = "LABEL",
        default_value = DEFAULT_PLC_LABEL,
        help = "PLC label used in Crimson's addressing scheme"
    )]
    pub plc_label: String,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.plc_label.trim().is_empty() {
            return Err(Error::configuration(
                "PLC label must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the pipeline configuration from the arguments
    pub fn to_config(&self) -> Config {
        Config::new(&self.open, &self.save).with_plc_label(&self.plc_label)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if the final summary should be printed (not in quiet mode)
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}
