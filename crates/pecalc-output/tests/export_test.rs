//! Integration tests for record export.

use pecalc_output::{CSV_COLUMNS, ExportFormat, Exporter, ValuationExport};
use pecalc_valuation::ValuationRecord;
use std::fs;

fn records() -> Vec<ValuationRecord> {
    vec![
        ValuationRecord {
            ticker: "GARAN.IS".to_string(),
            price: Some(120.5),
            trailing_eps: Some(30.0),
            forward_eps: Some(35.0),
            trailing_pe: Some(4.016667),
            forward_pe: Some(3.442857),
            notes: String::new(),
        },
        ValuationRecord {
            ticker: "AKBNK.IS".to_string(),
            price: Some(60.0),
            trailing_eps: None,
            forward_eps: Some(12.0),
            trailing_pe: None,
            forward_pe: Some(5.0),
            notes: "Trailing EPS missing/zero; ".to_string(),
        },
        ValuationRecord {
            ticker: "NOPE.IS".to_string(),
            notes: "Error: Missing data for NOPE.IS: unknown symbol".to_string(),
            ..ValuationRecord::default()
        },
    ]
}

#[test]
fn test_csv_file_has_header_and_one_line_per_record() {
    let path = std::env::temp_dir().join("pecalc_export_three_records.csv");
    let records = records();

    ValuationExport::new(&records)
        .export_to_file(&path, ExportFormat::Csv)
        .unwrap();
    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_COLUMNS.join(","));
    assert!(lines[1].starts_with("GARAN.IS,120.5,30,4.016667,35,3.442857,"));
    assert!(lines[2].starts_with("AKBNK.IS,60,,,12,5,"));
    assert!(lines[3].starts_with("NOPE.IS,,,,,,Error:"));
}

#[test]
fn test_csv_can_be_read_back() {
    let records = records();
    let csv = records.export_to_string(ExportFormat::Csv).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[1][0], "AKBNK.IS");
    assert_eq!(&rows[1][6], "Trailing EPS missing/zero; ");
}

#[test]
fn test_json_file_round_trips() {
    let path = std::env::temp_dir().join("pecalc_export_three_records.json");
    let records = records();

    records
        .export_to_file(&path, ExportFormat::PrettyJson)
        .unwrap();
    let content = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();

    let parsed: Vec<ValuationRecord> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, records);
}
