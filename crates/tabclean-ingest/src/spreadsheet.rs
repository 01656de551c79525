//! Workbook loading through `calamine`.
//!
//! Every cell is read as text: strings verbatim, numbers, booleans and dates
//! in their display form. Empty cells go through the same collapse as CSV.
//! Date cells render as `YYYY-MM-DD HH:MM:SS`; ISO date and duration cells
//! are kept as written.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDateTime;
use tabclean_model::{CellValue, Table};
use tracing::debug;

use crate::cells::collapse_empty;
use crate::error::{IngestError, Result};
use crate::header::normalize_headers_at;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Worksheet read from a workbook, with the sheet it came from.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub sheet: String,
    pub table: Table,
}

/// Reads one worksheet. The first worksheet is used when `sheet` is `None`.
pub fn read_spreadsheet_table(path: &Path, sheet: Option<&str>) -> Result<SheetTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let names = workbook.sheet_names().to_vec();
    let sheet = match sheet {
        Some(name) => names
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.to_string(),
                available: names.join(", "),
            })?,
        None => names.first().cloned().ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            message: format!("worksheet '{sheet}': {e}"),
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    // Unnamed headers are numbered by sheet column, not by used-range column.
    let first_column = range.start().map_or(0, |(_, col)| col as usize);
    let columns = normalize_headers_at(
        header.iter().map(|cell| cell_text(cell).unwrap_or_default()),
        first_column,
    );
    let width = columns.len();

    let mut table = Table::new(columns);
    for row in rows {
        let mut cells: Vec<CellValue> = row
            .iter()
            .take(width)
            .map(|cell| collapse_empty(cell_text(cell).as_deref()))
            .collect();
        cells.resize(width, CellValue::Absent);
        table.push_row(cells);
    }
    debug!(
        path = %path.display(),
        sheet = %sheet,
        columns = table.width(),
        rows = table.height(),
        "read spreadsheet table"
    );
    Ok(SheetTable { sheet, table })
}

/// Text form of a workbook cell; `None` for an empty cell.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            Some(value.clone())
        }
        Data::DateTime(value) => Some(
            value
                .as_datetime()
                .map_or_else(|| cell.to_string(), format_datetime),
        ),
        other => Some(other.to_string()),
    }
}

fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}
