use std::path::Path;

use tabclean_model::Table;
use tracing::{info, info_span};

use crate::csv_table::read_csv_table;
use crate::error::Result;
use crate::format::SourceFormat;
use crate::spreadsheet::read_spreadsheet_table;

/// Options for [`load_table`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Worksheet to read from a workbook. Ignored for CSV.
    pub sheet: Option<String>,
}

impl LoadOptions {
    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }
}

/// Table read from disk, together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub format: SourceFormat,
    /// Worksheet name, for spreadsheet sources.
    pub sheet: Option<String>,
}

/// Loads a CSV or spreadsheet file as a table of string-or-absent cells.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<LoadedTable> {
    let format = SourceFormat::from_path(path)?;
    let span = info_span!("load", path = %path.display(), format = %format);
    let _guard = span.enter();

    let loaded = match format {
        SourceFormat::Csv => LoadedTable {
            table: read_csv_table(path)?,
            format,
            sheet: None,
        },
        SourceFormat::Xlsx | SourceFormat::Xls => {
            let sheet_table = read_spreadsheet_table(path, options.sheet.as_deref())?;
            LoadedTable {
                table: sheet_table.table,
                format,
                sheet: Some(sheet_table.sheet),
            }
        }
    };
    info!(
        columns = loaded.table.width(),
        rows = loaded.table.height(),
        "table loaded"
    );
    Ok(loaded)
}
