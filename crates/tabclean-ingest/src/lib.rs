//! Table loading for tabclean.
//!
//! Reads CSV and spreadsheet files into [`Table`](tabclean_model::Table)s
//! without any type inference: every cell is text or absent.
//!
//! # Features
//!
//! - **Format Detection**: `.csv`, `.xlsx`/`.xlsm` and `.xls` by extension
//! - **CSV Loading**: header row first, short rows padded, wide rows rejected
//! - **Spreadsheet Loading**: first or named worksheet via `calamine`
//! - **Empty-Cell Collapse**: only `""` and missing cells become absent
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{LoadOptions, load_table};
//!
//! let loaded = load_table(Path::new("scores.csv"), &LoadOptions::default())?;
//! println!("{} rows", loaded.table.height());
//! ```

mod cells;
mod csv_table;
mod error;
mod format;
mod header;
mod loader;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use cells::collapse_empty;
pub use csv_table::{read_csv_from, read_csv_table};
pub use format::SourceFormat;
pub use header::{normalize_headers, normalize_headers_at};
pub use loader::{LoadOptions, LoadedTable, load_table};
pub use spreadsheet::{SheetTable, cell_text, read_spreadsheet_table};
