//! Flattening the reference interchange end to end: decode, flatten,
//! write CSV, and check the row set.

use std::fs;
use std::path::PathBuf;

use iftmin_decoder::decode;
use iftmin_export::{CsvWriter, FlatRow, ShipmentRow, shipment_rows, summary_row};

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn load_sample_text() -> String {
    let path = project_root().join("testdata").join("iftmin_sample.edi");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
}

#[test]
fn test_sample_flattens_to_six_rows() {
    let interchange = decode(&load_sample_text());
    let rows = shipment_rows(&interchange, "iftmin_sample.edi");

    assert_eq!(rows.len(), 6);
    assert!(
        rows.iter()
            .all(|r| r.manifest_number.as_deref() == Some("1027214650005003"))
    );
    assert!(rows.iter().all(|r| r.warehouse.as_deref() == Some("WTAM")));
    assert_eq!(rows.iter().filter(|r| r.shipment_index == 1).count(), 5);
    assert_eq!(rows.iter().filter(|r| r.shipment_index == 2).count(), 1);
    assert_eq!(rows[0].product_ref.as_deref(), Some("B0B8TH8P45"));
    assert_eq!(rows[5].product_ref.as_deref(), Some("B0BM6X8KLR"));
}

#[test]
fn test_sample_summary_row() {
    let interchange = decode(&load_sample_text());
    let summary = summary_row(&interchange, "iftmin_sample.edi");

    assert_eq!(summary.manifest_number.as_deref(), Some("1027214650005003"));
    assert_eq!(summary.currency.as_deref(), Some("EUR"));
    assert_eq!(summary.warehouse.as_deref(), Some("WTAM"));
    assert_eq!(summary.line_count, Some(6));
    assert_eq!(summary.shipments_found, 2);
}

#[test]
fn test_sample_rows_write_as_csv() {
    let interchange = decode(&load_sample_text());
    let rows = shipment_rows(&interchange, "iftmin_sample.edi");

    let mut output = Vec::new();
    CsvWriter::new().write_rows(&mut output, &rows).unwrap();

    let csv_text = String::from_utf8(output).unwrap();
    let mut lines = csv_text.lines();
    let header = lines.next().unwrap();
    assert_eq!(
        header.split(',').count(),
        ShipmentRow::headers().len(),
        "header width matches the column set"
    );
    assert_eq!(lines.count(), 6);
    assert!(csv_text.contains("B0B8XRZ2XY"));
    assert!(csv_text.contains("Afyonkarahisar"));
}
