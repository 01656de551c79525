//! Delimited-text loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tabclean_model::{CellValue, Table};
use tracing::debug;

use crate::cells::collapse_empty;
use crate::error::{IngestError, Result};
use crate::header::normalize_headers;

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads a CSV file. The first record is the header.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = open_file(path)?;
    read_csv_from(BufReader::new(file), path)
}

/// Reads CSV content from any reader; `path` is only used in errors.
pub fn read_csv_from<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record.map_err(|e| parse_error(path, &e))?,
        None => {
            return Err(IngestError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
    };
    let columns = normalize_headers(header.iter());
    let width = columns.len();

    let mut table = Table::new(columns);
    let mut absent_cells = 0usize;
    for record in records {
        let record = record.map_err(|e| parse_error(path, &e))?;
        let row = record_to_row(&record, width, path)?;
        absent_cells += row.iter().filter(|cell| cell.is_absent()).count();
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        absent_cells,
        "read csv table"
    );
    Ok(table)
}

fn record_to_row(record: &StringRecord, width: usize, path: &Path) -> Result<Vec<CellValue>> {
    if record.len() > width {
        return Err(IngestError::RowTooWide {
            path: path.to_path_buf(),
            line: record.position().map_or(0, csv::Position::line),
            expected: width,
            found: record.len(),
        });
    }
    let mut row: Vec<CellValue> = record.iter().map(|field| collapse_empty(Some(field))).collect();
    row.resize(width, CellValue::Absent);
    Ok(row)
}

fn parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
