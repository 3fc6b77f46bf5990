//! Crimson flag tag construction.
//!
//! Maps one decoded notification tag onto the fixed Crimson flag schema:
//! constant fields come from the defaults template, derived fields from the
//! tag and its decoded address.

use tracing::debug;

use crate::app::models::{FlagTag, NotificationTag};
use crate::app::services::address::{sanitize_tag_name, DecodedAddress};

/// Build a Crimson flag tag for a decoded notification tag
///
/// Returns `None` when any derived field would be empty; a partially
/// populated record must never reach the output table.
pub fn build_flag_tag(
    tag: &NotificationTag,
    address: &DecodedAddress,
    plc_label: &str,
) -> Option<FlagTag> {
    let mut flag = FlagTag::from_defaults();

    flag.name = sanitize_tag_name(&tag.code);
    flag.addressing.value = format!("[{}.{}_Table[{}]]", plc_label, address.table, address.row);
    flag.addressing.take_bit = format!("Bit {}", address.bit);
    flag.display.label = tag.code.clone();
    flag.display.desc = tag.description.clone();

    if !flag.is_complete() {
        debug!("Discarding incomplete flag tag for code '{}'", tag.code);
        return None;
    }

    Some(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::TagType;

    fn fault_tag() -> NotificationTag {
        NotificationTag {
            tag_type: TagType::Fault,
            description: "gate fault".to_string(),
            code: "Fault_Table[3].7".to_string(),
            index: 0,
        }
    }

    #[test]
    fn test_build_derived_fields() {
        let tag = fault_tag();
        let address = DecodedAddress {
            table: "Fault".to_string(),
            row: 3,
            bit: 7,
        };

        let flag = build_flag_tag(&tag, &address, "PLC1").unwrap();
        assert_eq!(flag.name, "Fault_Table_3_7");
        assert_eq!(flag.addressing.value, "[PLC1.Fault_Table[3]]");
        assert_eq!(flag.addressing.take_bit, "Bit 7");
        assert_eq!(flag.display.label, "Fault_Table[3].7");
        assert_eq!(flag.display.desc, "gate fault");
    }

    #[test]
    fn test_build_uses_configured_plc_label() {
        let tag = fault_tag();
        let address = DecodedAddress {
            table: "Fault".to_string(),
            row: 3,
            bit: 7,
        };

        let flag = build_flag_tag(&tag, &address, "LIFT7").unwrap();
        assert_eq!(flag.addressing.value, "[LIFT7.Fault_Table[3]]");
    }

    #[test]
    fn test_build_preserves_bit_zero() {
        let tag = NotificationTag {
            tag_type: TagType::Alarm,
            description: "overspeed".to_string(),
            code: "Alarm_Table[12].0".to_string(),
            index: 4,
        };
        let address = DecodedAddress {
            table: "Alarm".to_string(),
            row: 12,
            bit: 0,
        };

        let flag = build_flag_tag(&tag, &address, "PLC1").unwrap();
        assert_eq!(flag.addressing.take_bit, "Bit 0");
    }

    #[test]
    fn test_build_keeps_constant_fields() {
        let tag = fault_tag();
        let address = DecodedAddress {
            table: "Fault".to_string(),
            row: 3,
            bit: 7,
        };

        let flag = build_flag_tag(&tag, &address, "PLC1").unwrap();
        let template = FlagTag::from_defaults();
        assert_eq!(flag.addressing.access, template.addressing.access);
        assert_eq!(flag.display.color_on, template.display.color_on);
        assert_eq!(flag.events, template.events);
        assert_eq!(flag.security, template.security);
    }

    #[test]
    fn test_build_discards_empty_description() {
        // Classifier should never let one through, but the invariant holds
        // here regardless
        let tag = NotificationTag {
            tag_type: TagType::Fault,
            description: String::new(),
            code: "Fault_Table[3].7".to_string(),
            index: 0,
        };
        let address = DecodedAddress {
            table: "Fault".to_string(),
            row: 3,
            bit: 7,
        };

        assert!(build_flag_tag(&tag, &address, "PLC1").is_none());
    }
}
