//! Table data model shared by the tabclean crates.
//!
//! A [`Table`] is what a loader produces: labeled columns and rows of
//! [`CellValue`]s that are either text or absent. A [`CleanTable`] is what
//! the normalizer produces and a writer consumes: strings only.

pub mod columns;
pub mod error;
pub mod report;
pub mod table;

pub use columns::ColumnSource;
pub use error::{ModelError, Result};
pub use report::NormalizeReport;
pub use table::{CellValue, CleanTable, Table};
