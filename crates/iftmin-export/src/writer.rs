//! CSV writer

use crate::config::CsvConfig;
use crate::errors::{ExportError, Result};
use crate::rows::FlatRow;
use std::io::Write;
use tracing::{debug, trace};

/// Writer for flattened rows
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    config: CsvConfig,
}

impl CsvWriter {
    /// Create a new CSV writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Write rows of one flat type to CSV
    pub fn write_rows<W: Write, R: FlatRow>(&self, writer: W, rows: &[R]) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter_u8())
            .from_writer(writer);

        if self.config.has_header {
            csv_writer
                .write_record(R::headers())
                .map_err(|e| ExportError::Write(e.to_string()))?;
        }

        for row in rows {
            let record = row.to_record();
            csv_writer
                .write_record(&record)
                .map_err(|e| ExportError::Write(e.to_string()))?;
            trace!(cell_count = record.len(), "wrote CSV row");
        }

        csv_writer
            .flush()
            .map_err(|e| ExportError::Write(e.to_string()))?;
        debug!(row_count = rows.len(), "finished writing CSV");
        Ok(())
    }
}
