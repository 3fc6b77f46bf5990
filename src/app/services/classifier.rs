//! Source row classification.
//!
//! Scans the RSLogix export, drops malformed rows, and buckets the valid
//! ones into the three notification tag tables by their table identifier
//! column. Dropping a row is intentional filtering, never an error; only
//! I/O failures abort the scan.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::app::models::{TagTable, TagType};
use crate::constants::{
    CANDIDATE_DELIMITERS, COL_ADDRESS_CODE, COL_DESCRIPTION, COL_TABLE_IDENT, MIN_SOURCE_COLUMNS,
    SNIFF_SAMPLE_BYTES,
};
use crate::{Error, Result};

/// Extracts the `<TypeName>` prefix from a table identifier
static TABLE_IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)_Table$").unwrap());

/// Classification result: the three typed tables plus scan statistics
#[derive(Debug, Clone)]
pub struct ClassifyResult {
    pub alarm: TagTable,
    pub bypass: TagTable,
    pub fault: TagTable,
    pub stats: ClassifyStats,
}

impl ClassifyResult {
    /// The tables in conversion order (Alarm, Bypass, Fault)
    pub fn tables(&self) -> [&TagTable; 3] {
        [&self.alarm, &self.bypass, &self.fault]
    }
}

/// Statistics for one classification pass
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ClassifyStats {
    /// Total rows read from the export
    pub rows_total: usize,

    /// Rows classified into a tag table
    pub tags_classified: usize,

    /// Rows dropped by filtering (short rows, empty cells, unknown tables)
    pub rows_ignored: usize,

    /// Rows the CSV reader itself could not parse
    pub read_errors: usize,
}

/// Classify the rows of an RSLogix export file
///
/// The delimiter is sniffed from the first kilobyte of the file, with a
/// comma fallback. Row order is preserved within each table.
pub fn classify_file(path: &Path) -> Result<ClassifyResult> {
    info!("Classifying RSLogix export: {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

    let delimiter = sniff_delimiter(content.as_bytes());
    debug!("Sniffed delimiter: {:?}", delimiter as char);

    let result = classify_rows(&content, delimiter);

    info!(
        "Classified {} of {} rows ({} alarm, {} bypass, {} fault)",
        result.stats.tags_classified,
        result.stats.rows_total,
        result.alarm.len(),
        result.bypass.len(),
        result.fault.len()
    );

    Ok(result)
}

/// Classify already-loaded export content
pub fn classify_rows(content: &str, delimiter: u8) -> ClassifyResult {
    let mut alarm = TagTable::new(TagType::Alarm);
    let mut bypass = TagTable::new(TagType::Bypass);
    let mut fault = TagTable::new(TagType::Fault);
    let mut stats = ClassifyStats::default();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    for record in reader.records() {
        stats.rows_total += 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                stats.read_errors += 1;
                debug!("Unreadable row {}: {}", stats.rows_total, e);
                continue;
            }
        };

        if record.len() < MIN_SOURCE_COLUMNS {
            stats.rows_ignored += 1;
            continue;
        }

        let description = record.get(COL_DESCRIPTION).unwrap_or("");
        let code = record.get(COL_ADDRESS_CODE).unwrap_or("");
        if description.is_empty() || code.is_empty() {
            stats.rows_ignored += 1;
            continue;
        }

        let ident = record.get(COL_TABLE_IDENT).unwrap_or("");
        let tag_type = TABLE_IDENT
            .captures(ident)
            .and_then(|caps| TagType::from_type_name(&caps[1]));

        let appended = match tag_type {
            Some(TagType::Alarm) => alarm.append(TagType::Alarm, description, code),
            Some(TagType::Bypass) => bypass.append(TagType::Bypass, description, code),
            Some(TagType::Fault) => fault.append(TagType::Fault, description, code),
            None => {
                debug!("Ignoring row with unrecognized table '{}'", ident);
                false
            }
        };

        if appended {
            stats.tags_classified += 1;
            debug!("{} table populated with ({}, {})", ident, description, code);
        } else {
            stats.rows_ignored += 1;
        }
    }

    ClassifyResult {
        alarm,
        bypass,
        fault,
        stats,
    }
}

/// Sniff the cell delimiter from the leading bytes of the file
///
/// The candidate with the highest occurrence count in the first kilobyte
/// wins; when nothing is found the export is assumed comma-separated.
pub fn sniff_delimiter(content: &[u8]) -> u8 {
    let sample = &content[..content.len().min(SNIFF_SAMPLE_BYTES)];

    let mut best = b',';
    let mut best_count = 0;
    for &candidate in CANDIDATE_DELIMITERS {
        let count = sample.iter().filter(|&&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}
