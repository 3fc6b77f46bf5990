//! Crimson import file output.
//!
//! Serializes the collected flag tags into the Crimson import CSV shape:
//! a blank line, the literal `[Flag.5.2]` section marker, another blank
//! line, the fixed header row, then one data row per tag in input order.
//! Crimson expects CRLF line endings throughout.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::app::models::FlagTag;
use crate::constants::{FLAG_COLUMN_HEADERS, FLAG_SECTION_MARKER};
use crate::{Error, Result};

/// Write the Crimson import file for the given flag tags
///
/// No sorting, no deduplication: tags are written exactly in the order
/// given, and zero tags still produces the full preamble and header.
pub fn write_import_file(path: &Path, tags: &[FlagTag]) -> Result<()> {
    info!(
        "Writing Crimson import with {} flag tags to {}",
        tags.len(),
        path.display()
    );

    let mut file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create file {}", path.display()), e))?;

    write!(file, "\r\n{}\r\n\r\n", FLAG_SECTION_MARKER)
        .map_err(|e| Error::io(format!("Failed to write preamble to {}", path.display()), e))?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer.write_record(FLAG_COLUMN_HEADERS).map_err(|e| {
        Error::csv_writing(
            path.display().to_string(),
            "Failed to write header row",
            Some(e),
        )
    })?;

    for tag in tags {
        writer.write_record(tag.to_record()).map_err(|e| {
            Error::csv_writing(
                path.display().to_string(),
                format!("Failed to write record '{}'", tag.name),
                Some(e),
            )
        })?;
    }

    writer.flush().map_err(|e| {
        Error::io(
            format!("Failed to flush output file {}", path.display()),
            e,
        )
    })?;

    Ok(())
}
