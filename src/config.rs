//! Configuration for a conversion run.
//!
//! The [`Config`] context object carries everything the pipeline needs:
//! the two file paths and the PLC device label used in generated address
//! expressions. It is built once from the CLI arguments and passed into the
//! pipeline explicitly, so library callers and tests never touch global
//! state.

use std::path::PathBuf;

use crate::constants::DEFAULT_PLC_LABEL;
use crate::{Error, Result};

/// Context for one conversion run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the RSLogix export CSV to read
    pub input_path: PathBuf,

    /// Path the Crimson import CSV is written to
    pub output_path: PathBuf,

    /// Device label prefixed to generated address expressions
    pub plc_label: String,
}

impl Config {
    /// Create a config with the default PLC label
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            plc_label: DEFAULT_PLC_LABEL.to_string(),
        }
    }

    /// Override the PLC device label
    pub fn with_plc_label(mut self, label: impl Into<String>) -> Self {
        self.plc_label = label.into();
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(
                self.input_path.display().to_string(),
            ));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if self.plc_label.trim().is_empty() {
            return Err(Error::configuration(
                "PLC label must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_plc_label() {
        let config = Config::new("in.csv", "out.csv");
        assert_eq!(config.plc_label, "PLC1");

        let config = config.with_plc_label("LIFT7");
        assert_eq!(config.plc_label, "LIFT7");
    }

    #[test]
    fn test_validate_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(
            temp_dir.path().join("missing.csv"),
            temp_dir.path().join("out.csv"),
        );
        assert!(matches!(
            config.validate(),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_directory_input() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path(), temp_dir.path().join("out.csv"));
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.csv");
        std::fs::write(&input, "a,b,c\n").unwrap();

        let config = Config::new(&input, temp_dir.path().join("nope").join("out.csv"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_blank_plc_label() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.csv");
        std::fs::write(&input, "a,b,c\n").unwrap();

        let config =
            Config::new(&input, temp_dir.path().join("out.csv")).with_plc_label("   ");
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_ok() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.csv");
        std::fs::write(&input, "a,b,c\n").unwrap();

        let config = Config::new(&input, temp_dir.path().join("out.csv"));
        assert!(config.validate().is_ok());
    }
}
