//! Output generation for cleaned tables.
//!
//! - **CSV**: header row plus one line per row
//! - **XLSX**: one worksheet, every cell written as a string
//!
//! Legacy `.xls` sources are written back as `.xlsx`.

mod csv_output;
mod error;
mod naming;
mod xlsx;

use std::path::Path;

use tabclean_ingest::SourceFormat;
use tabclean_model::CleanTable;
use tracing::info;

pub use csv_output::{write_csv, write_csv_to};
pub use error::{OutputError, Result};
pub use naming::{DEFAULT_PREFIX, cleaned_file_name, output_path};
pub use xlsx::write_xlsx;

/// Options for [`write_table`].
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Worksheet name for spreadsheet outputs.
    pub sheet: Option<String>,
}

/// Writes `table` to `path` in the given format, creating parent folders.
pub fn write_table(
    path: &Path,
    format: SourceFormat,
    table: &CleanTable,
    options: &WriteOptions,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    match format {
        SourceFormat::Csv => write_csv(path, table)?,
        SourceFormat::Xlsx | SourceFormat::Xls => {
            write_xlsx(path, table, options.sheet.as_deref())?;
        }
    }
    info!(
        path = %path.display(),
        format = %format,
        columns = table.width(),
        rows = table.height(),
        "table written"
    );
    Ok(())
}
