//! Core data structures for tag conversion.
//!
//! Defines the notification tag types parsed from the RSLogix export and
//! the fixed-schema Crimson flag tag record produced for import.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::flag_defaults;

/// Notification tag types supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagType {
    Alarm,
    Bypass,
    Fault,
}

impl TagType {
    /// Resolve a tag type from the `<TypeName>` prefix of a table identifier
    ///
    /// The match is case-sensitive; anything other than the three known
    /// type names yields `None`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Alarm" => Some(TagType::Alarm),
            "Bypass" => Some(TagType::Bypass),
            "Fault" => Some(TagType::Fault),
            _ => None,
        }
    }

    /// The type name as it appears in table identifiers
    pub fn type_name(&self) -> &'static str {
        match self {
            TagType::Alarm => "Alarm",
            TagType::Bypass => "Bypass",
            TagType::Fault => "Fault",
        }
    }

    /// The full table identifier for this type (`Alarm_Table` etc.)
    pub fn table_identifier(&self) -> String {
        format!("{}_Table", self.type_name())
    }
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One classified notification point from the RSLogix export
///
/// Immutable once appended to a [`TagTable`]; `index` is the tag's ordinal
/// position within its table, assigned at append time and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTag {
    pub tag_type: TagType,
    pub description: String,
    pub code: String,
    pub index: u32,
}

/// Ordered collection of notification tags of a single type
///
/// Owns the per-table index counter so that indices form a gapless
/// sequence from 0 in input order.
#[derive(Debug, Clone)]
pub struct TagTable {
    tag_type: TagType,
    tags: Vec<NotificationTag>,
    next_index: u32,
}

impl TagTable {
    /// Create an empty table for the given tag type
    pub fn new(tag_type: TagType) -> Self {
        Self {
            tag_type,
            tags: Vec::new(),
            next_index: 0,
        }
    }

    /// The type of tags this table accepts
    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    /// Append a tag, assigning it the next ordinal index
    ///
    /// A tag whose type does not match the table's configured type is
    /// rejected with a diagnostic and does not consume an index. Returns
    /// whether the tag was appended.
    pub fn append(&mut self, tag_type: TagType, description: &str, code: &str) -> bool {
        if tag_type != self.tag_type {
            debug!(
                "Tag and table types mismatch: tag {} vs table {}",
                tag_type, self.tag_type
            );
            return false;
        }

        self.tags.push(NotificationTag {
            tag_type,
            description: description.to_string(),
            code: code.to_string(),
            index: self.next_index,
        });
        self.next_index += 1;
        true
    }

    /// Tags in input order
    pub fn tags(&self) -> &[NotificationTag] {
        &self.tags
    }

    /// Number of tags in the table
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the table holds no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Addressing fields of a Crimson flag tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagAddressing {
    /// Crimson address expression, e.g. `[PLC1.Fault_Table[3]]`
    pub value: String,
    pub extent: String,
    pub treat_as: String,
    /// Bit selector within the table word, e.g. `Bit 7`
    pub take_bit: String,
    pub manipulate: String,
    pub access: String,
    pub sim: String,
    pub on_write: String,
    pub has_sp: String,
}

/// Display fields of a Crimson flag tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDisplay {
    /// Raw RSLogix address code shown on the HMI
    pub label: String,
    /// Human-readable description from the export
    pub desc: String,
    pub class: String,
    pub form_type: String,
    pub format_on: String,
    pub format_off: String,
    pub col_type: String,
    pub color_on: String,
    pub color_off: String,
}

/// Alarm/event/trigger configuration of a Crimson flag tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagEvents {
    pub event1: String,
    pub event2: String,
    pub trigger1: String,
    pub trigger2: String,
}

/// Security configuration of a Crimson flag tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSecurity {
    pub access: String,
    pub logging: String,
}

/// One fully-specified row of the Crimson flag tag import schema
///
/// Constant fields come from the shared defaults template
/// ([`FlagTag::from_defaults`]); only the derived fields (name, address
/// expression, bit selector, label, description) vary per tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTag {
    /// Sanitized tag name unique within the import
    pub name: String,
    pub addressing: FlagAddressing,
    pub display: FlagDisplay,
    pub events: FlagEvents,
    pub security: FlagSecurity,
}

impl FlagTag {
    /// Create a flag tag with every constant field set to its fixed default
    /// and every derived field left empty
    pub fn from_defaults() -> Self {
        Self {
            name: String::new(),
            addressing: FlagAddressing {
                value: String::new(),
                extent: flag_defaults::EXTENT.to_string(),
                treat_as: flag_defaults::TREAT_AS.to_string(),
                take_bit: String::new(),
                manipulate: flag_defaults::MANIPULATE.to_string(),
                access: flag_defaults::ACCESS.to_string(),
                sim: flag_defaults::SIM.to_string(),
                on_write: flag_defaults::ON_WRITE.to_string(),
                has_sp: flag_defaults::HAS_SP.to_string(),
            },
            display: FlagDisplay {
                label: String::new(),
                desc: String::new(),
                class: flag_defaults::CLASS.to_string(),
                form_type: flag_defaults::FORM_TYPE.to_string(),
                format_on: flag_defaults::FORMAT_ON.to_string(),
                format_off: flag_defaults::FORMAT_OFF.to_string(),
                col_type: flag_defaults::COL_TYPE.to_string(),
                color_on: flag_defaults::COLOR_ON.to_string(),
                color_off: flag_defaults::COLOR_OFF.to_string(),
            },
            events: FlagEvents {
                event1: flag_defaults::EVENT_MODE.to_string(),
                event2: flag_defaults::EVENT_MODE.to_string(),
                trigger1: flag_defaults::TRIGGER_MODE.to_string(),
                trigger2: flag_defaults::TRIGGER_MODE.to_string(),
            },
            security: FlagSecurity {
                access: flag_defaults::SEC_ACCESS.to_string(),
                logging: flag_defaults::SEC_LOGGING.to_string(),
            },
        }
    }

    /// Whether every derived field carries a value
    ///
    /// A record failing this check must never be emitted.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.addressing.value.is_empty()
            && !self.addressing.take_bit.is_empty()
            && !self.display.label.is_empty()
            && !self.display.desc.is_empty()
    }

    /// The 25 field values in Crimson import column order
    pub fn to_record(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.addressing.value,
            &self.addressing.extent,
            &self.addressing.treat_as,
            &self.addressing.take_bit,
            &self.addressing.manipulate,
            &self.addressing.access,
            &self.addressing.sim,
            &self.addressing.on_write,
            &self.addressing.has_sp,
            &self.display.label,
            &self.display.desc,
            &self.display.class,
            &self.display.form_type,
            &self.display.format_on,
            &self.display.format_off,
            &self.display.col_type,
            &self.display.color_on,
            &self.display.color_off,
            &self.events.event1,
            &self.events.event2,
            &self.events.trigger1,
            &self.events.trigger2,
            &self.security.access,
            &self.security.logging,
        ]
    }
}
