//! Application constants for the Crimson converter
//!
//! This module contains the fixed values of the Crimson flag tag import
//! schema, the RSLogix table identifiers, and default configuration values
//! used throughout the converter.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default PLC device label used in generated Crimson address expressions
pub const DEFAULT_PLC_LABEL: &str = "PLC1";

// =============================================================================
// RSLogix Export Layout
// =============================================================================

/// Recognized notification tag table identifiers in the RSLogix export
pub const TABLE_IDENTIFIERS: &[&str] = &["Alarm_Table", "Bypass_Table", "Fault_Table"];

/// Minimum number of cells a source row must carry to be considered
pub const MIN_SOURCE_COLUMNS: usize = 6;

/// Source column holding the table identifier
pub const COL_TABLE_IDENT: usize = 2;

/// Source column holding the human-readable description
pub const COL_DESCRIPTION: usize = 3;

/// Source column holding the raw PLC address code
pub const COL_ADDRESS_CODE: usize = 5;

/// Number of bytes sampled when sniffing the source delimiter
pub const SNIFF_SAMPLE_BYTES: usize = 1024;

/// Delimiters considered by the sniffer, in tie-break order
pub const CANDIDATE_DELIMITERS: &[u8] = &[b',', b';', b'\t', b'|'];

// =============================================================================
// Crimson Import Layout
// =============================================================================

/// Literal section marker that opens the flag tag block of a Crimson import
pub const FLAG_SECTION_MARKER: &str = "[Flag.5.2]";

/// Column headers of the Crimson flag tag import schema, in output order
pub const FLAG_COLUMN_HEADERS: &[&str] = &[
    "Name",
    "Value",
    "Extent",
    "FlagTreatAs",
    "TakeBit",
    "Manipulate",
    "Access",
    "Sim",
    "OnWrite",
    "HasSP",
    "Label",
    "Desc",
    "Class",
    "FormType",
    "Format / On",
    "Format / Off",
    "ColType",
    "Color / On",
    "Color / Off",
    "Event1 / Mode",
    "Event2 / Mode",
    "Trigger1 / Mode",
    "Trigger2 / Mode",
    "Sec / Access",
    "Sec / Logging",
];

/// Fixed field values shared by every generated flag tag
///
/// These are the parts of the Crimson flag schema this integration never
/// varies: single-bit reads off a little-endian bit array, two-state
/// display, alarm/event handling disabled, default security.
pub mod flag_defaults {
    /// Extent 0 pulls single bits off the array rather than a range
    pub const EXTENT: &str = "0";

    /// Least-significant-bit-first interpretation of the table word
    pub const TREAT_AS: &str = "Bit Array Little-Endian";

    /// No bit inversion
    pub const MANIPULATE: &str = "None";

    /// Notification points are never writable from the HMI
    pub const ACCESS: &str = "Read Only";

    /// No simulation expression
    pub const SIM: &str = "";

    /// No on-write action expression
    pub const ON_WRITE: &str = "";

    /// No setpoint
    pub const HAS_SP: &str = "No";

    /// Class is unused by Crimson for this integration
    pub const CLASS: &str = "";

    /// Two-state (boolean) formatting
    pub const FORM_TYPE: &str = "Two-State";

    pub const FORMAT_ON: &str = "";
    pub const FORMAT_OFF: &str = "";

    /// Two-state coloring
    pub const COL_TYPE: &str = "Two-State";

    /// Faulted state rendering
    pub const COLOR_ON: &str = "Red on Black";

    /// Healthy state rendering
    pub const COLOR_OFF: &str = "Lime on Black";

    /// Crimson-side alarming stays off; alarm routing lives in the PLC
    pub const EVENT_MODE: &str = "Disabled";

    /// Trigger actions stay off
    pub const TRIGGER_MODE: &str = "Disabled";

    /// Security inherits the object defaults
    pub const SEC_ACCESS: &str = "Default for Object";
    pub const SEC_LOGGING: &str = "Default for Object";
}
