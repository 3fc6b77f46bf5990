//! Conversion pipeline orchestration.
//!
//! Runs the full batch sequentially: classify the export rows, decode and
//! build a flag tag per notification tag, then write the import file.
//! Tag-level problems are counted and logged, never fatal; only I/O
//! failures abort the run.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::app::models::FlagTag;
use crate::app::services::address::{decode_address, AddressDecode};
use crate::app::services::builder::build_flag_tag;
use crate::app::services::classifier::{classify_file, ClassifyStats};
use crate::app::services::writer::write_import_file;
use crate::config::Config;
use crate::Result;

/// Statistics for one conversion run
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ConvertStats {
    /// Classification statistics for the source scan
    pub classify: ClassifyStats,

    /// Tags classified per table (alarm, bypass, fault)
    pub alarm_tags: usize,
    pub bypass_tags: usize,
    pub fault_tags: usize,

    /// Flag tags written to the import file
    pub flags_written: usize,

    /// Tags with truncated addresses, skipped by design
    pub tags_skipped: usize,

    /// Tags whose address matched neither pattern (or both)
    pub addresses_malformed: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u128,
}

/// Run the complete conversion described by `config`
///
/// Tables are converted in Alarm, Bypass, Fault order, preserving input
/// order within each table.
pub fn convert(config: &Config) -> Result<ConvertStats> {
    let start = Instant::now();

    let classified = classify_file(&config.input_path)?;

    let mut stats = ConvertStats {
        classify: classified.stats.clone(),
        alarm_tags: classified.alarm.len(),
        bypass_tags: classified.bypass.len(),
        fault_tags: classified.fault.len(),
        ..Default::default()
    };

    let mut flags: Vec<FlagTag> = Vec::with_capacity(stats.classify.tags_classified);
    for table in classified.tables() {
        for tag in table.tags() {
            match decode_address(&tag.code) {
                AddressDecode::Decoded(address) => {
                    match build_flag_tag(tag, &address, &config.plc_label) {
                        Some(flag) => flags.push(flag),
                        None => stats.tags_skipped += 1,
                    }
                }
                AddressDecode::Incomplete => {
                    stats.tags_skipped += 1;
                    debug!("Skipping truncated address code '{}'", tag.code);
                }
                AddressDecode::Malformed => {
                    stats.addresses_malformed += 1;
                    warn!(
                        "Address code '{}' ({} tag {}) matched no known pattern",
                        tag.code, tag.tag_type, tag.index
                    );
                }
            }
        }
    }

    info!("Crimson flag table built with {} entries", flags.len());

    write_import_file(&config.output_path, &flags)?;

    stats.flags_written = flags.len();
    stats.processing_time_ms = start.elapsed().as_millis();

    Ok(stats)
}
