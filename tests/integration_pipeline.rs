//! End-to-end tests for the RSLogix → Crimson conversion pipeline
//!
//! These tests drive the pipeline through the library entry point exactly
//! as the CLI does: write an export file, run the conversion, then check
//! the produced import file byte-for-byte where the format is fixed.

use crimson_converter::app::services::converter::convert;
use crimson_converter::constants::FLAG_COLUMN_HEADERS;
use crimson_converter::Config;
use tempfile::TempDir;

fn convert_to_string(input: &str, plc_label: Option<&str>) -> String {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("export.csv");
    let output_path = temp_dir.path().join("import.csv");
    std::fs::write(&input_path, input).unwrap();

    let mut config = Config::new(&input_path, &output_path);
    if let Some(label) = plc_label {
        config = config.with_plc_label(label);
    }
    config.validate().unwrap();

    convert(&config).unwrap();
    std::fs::read_to_string(&output_path).unwrap()
}

#[test]
fn test_full_conversion_of_realistic_export() {
    // Shaped like an RSLogix tag export: extra leading columns, a header
    // row that fails classification, and notification rows at columns
    // 2 (table), 3 (description) and 5 (address code).
    let input = "\
TYPE,SCOPE,NAME,DESCRIPTION,DATATYPE,SPECIFIER\n\
TAG,,Alarm_Table,Car overspeed,BOOL,Alarm_Table[0].3\n\
TAG,,Alarm_Table,Low oil pressure,BOOL,Alarm_Table[0].4\n\
TAG,,Bypass_Table,Rope gripper bypass,BOOL,Bypass_Table[1].0\n\
TAG,,Fault_Table,Gate lock fault,BOOL,Fault_Table[3].7\n";

    let output = convert_to_string(input, None);
    let lines: Vec<&str> = output.split("\r\n").collect();

    // Fixed preamble regardless of content
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "[Flag.5.2]");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], FLAG_COLUMN_HEADERS.join(","));

    // Alarm tags first, then bypass, then fault
    assert_eq!(
        lines[4],
        "Alarm_Table_0_3,[PLC1.Alarm_Table[0]],0,Bit Array Little-Endian,Bit 3,None,\
         Read Only,,,No,Alarm_Table[0].3,Car overspeed,,Two-State,,,Two-State,\
         Red on Black,Lime on Black,Disabled,Disabled,Disabled,Disabled,\
         Default for Object,Default for Object"
    );
    assert!(lines[5].starts_with("Alarm_Table_0_4,[PLC1.Alarm_Table[0]],"));
    assert!(lines[6].starts_with("Bypass_Table_1_0,[PLC1.Bypass_Table[1]],"));
    assert!(lines[7].starts_with("Fault_Table_3_7,[PLC1.Fault_Table[3]],"));
    assert_eq!(lines[8], "");
    assert_eq!(lines.len(), 9);
}

#[test]
fn test_custom_plc_label_in_address_expressions() {
    let input = "TAG,,Fault_Table,Gate lock fault,BOOL,Fault_Table[3].7\n";
    let output = convert_to_string(input, Some("LIFT7"));
    assert!(output.contains("[LIFT7.Fault_Table[3]]"));
    assert!(!output.contains("PLC1"));
}

#[test]
fn test_truncated_addresses_are_dropped_silently() {
    let input = "\
TAG,,Bypass_Table,No bit named,BOOL,Bypass_Table[5]\n\
TAG,,Fault_Table,Gate lock fault,BOOL,Fault_Table[3].7\n";

    let output = convert_to_string(input, None);
    assert!(!output.contains("No bit named"));
    assert!(output.contains("Gate lock fault"));
}

#[test]
fn test_semicolon_delimited_export() {
    let input = "\
TAG;;Alarm_Table;Car overspeed;BOOL;Alarm_Table[0].3\n\
TAG;;Fault_Table;Gate lock fault;BOOL;Fault_Table[3].7\n";

    let output = convert_to_string(input, None);
    assert!(output.contains("Alarm_Table_0_3"));
    assert!(output.contains("Fault_Table_3_7"));
}

#[test]
fn test_empty_export_yields_valid_empty_import() {
    let output = convert_to_string("", None);
    assert_eq!(
        output,
        format!(
            "\r\n[Flag.5.2]\r\n\r\n{}\r\n",
            FLAG_COLUMN_HEADERS.join(",")
        )
    );
}

#[test]
fn test_duplicate_codes_produce_duplicate_rows() {
    let input = "\
TAG,,Fault_Table,Gate lock fault,BOOL,Fault_Table[3].7\n\
TAG,,Fault_Table,Gate lock fault,BOOL,Fault_Table[3].7\n";

    let output = convert_to_string(input, None);
    assert_eq!(output.matches("Fault_Table_3_7").count(), 2);
}

#[test]
fn test_description_with_commas_survives_round_trip() {
    let input =
        "TAG,,Fault_Table,\"Gate fault, car 2, landing side\",BOOL,Fault_Table[3].7\n";
    let output = convert_to_string(input, None);
    assert!(output.contains("\"Gate fault, car 2, landing side\""));

    // Read it back with the csv crate the way Crimson's importer would
    let data_start = output.find("Name,").unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(output[data_start..].as_bytes());
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(record.get(11), Some("Gate fault, car 2, landing side"));
}
