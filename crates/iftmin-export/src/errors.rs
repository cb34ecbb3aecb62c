//! Export error types

use thiserror::Error;

/// Errors that can occur when writing flattened rows
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-local result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
