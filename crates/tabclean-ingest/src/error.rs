//! Error types for table loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a table from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Format Errors ===
    /// Extension is neither delimited text nor a spreadsheet.
    #[error(
        "unsupported file format '{extension}' for {path}: please select a CSV or Excel file"
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A data row has more fields than the header.
    #[error("row on line {line} of {path} has {found} fields, header has {expected}")]
    RowTooWide {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// File has no header row.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Spreadsheet Errors ===
    /// Failed to open or read a workbook.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Requested worksheet does not exist.
    #[error("worksheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: String,
    },

    /// Workbook contains no worksheets.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
