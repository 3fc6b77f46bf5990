//! PLC address code decoding.
//!
//! An RSLogix address code names a table word and a bit within it, e.g.
//! `Fault_Table[3].7`. Decoding evaluates two anchored patterns against the
//! code and returns an explicit tagged result instead of nullable match
//! objects, so callers can distinguish an intentionally skippable truncated
//! address from a malformed one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Complete bit-level address: table word plus bit selector
static VALID_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\w+)_Table\W(\d{1,2})\W\.(\d{1,2})").unwrap());

/// Address naming a row but no bit; categorically not convertible
static TRUNCATED_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\w+)_Table\W\d{1,2}\W$").unwrap());

/// Runs of characters that cannot appear in a Crimson tag name
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Successfully decoded bit-level address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Table type name as captured from the code (e.g. `Fault`)
    pub table: String,
    /// Word index within the table
    pub row: u8,
    /// Bit index within the word; 0 is a valid bit
    pub bit: u8,
}

/// Outcome of decoding one address code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressDecode {
    /// The code names a table, row and bit
    Decoded(DecodedAddress),

    /// The code names a row but no bit; the tag is skipped, not an error
    Incomplete,

    /// Neither pattern matched (or both did) — a reportable anomaly,
    /// non-fatal for the run
    Malformed,
}

/// Decode a raw RSLogix address code
pub fn decode_address(code: &str) -> AddressDecode {
    let valid = VALID_ADDRESS.captures(code);
    let truncated = TRUNCATED_ADDRESS.is_match(code);

    match (valid, truncated) {
        (Some(caps), false) => {
            // 1-2 digit captures always fit in u8
            let (Ok(row), Ok(bit)) = (caps[2].parse(), caps[3].parse()) else {
                return AddressDecode::Malformed;
            };
            AddressDecode::Decoded(DecodedAddress {
                table: caps[1].to_string(),
                row,
                bit,
            })
        }
        (None, true) => AddressDecode::Incomplete,
        _ => AddressDecode::Malformed,
    }
}

/// Sanitize an address code into a Crimson tag name
///
/// Every maximal run of non-alphanumeric characters becomes a single
/// underscore; nothing else is collapsed or trimmed.
pub fn sanitize_tag_name(code: &str) -> String {
    NON_WORD_RUN.replace_all(code, "_").into_owned()
}
