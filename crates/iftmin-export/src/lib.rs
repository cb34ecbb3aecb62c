//! # iftmin-export
//!
//! Flattened row export for decoded IFTMIN interchanges.
//!
//! This crate turns [`iftmin_records::Interchange`] values into flat,
//! export-ready rows (one summary row per interchange and one row per
//! shipment/item pair) and writes them as CSV.

pub mod config;
pub mod errors;
pub mod rows;
pub mod writer;

pub use config::CsvConfig;
pub use errors::{ExportError, Result};
pub use rows::{FlatRow, ShipmentRow, SummaryRow, shipment_rows, summary_row};
pub use writer::CsvWriter;
