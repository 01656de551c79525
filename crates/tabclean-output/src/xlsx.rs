use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};
use tabclean_model::CleanTable;

use crate::error::{OutputError, Result};

/// Writes a table to a single-worksheet workbook, every cell as a string.
pub fn write_xlsx(path: &Path, table: &CleanTable, sheet: Option<&str>) -> Result<()> {
    let spreadsheet_error = |source: XlsxError| OutputError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };
    let limit_error = || OutputError::SheetLimit {
        rows: table.height() + 1,
        columns: table.width(),
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    if let Some(name) = sheet {
        worksheet.set_name(name).map_err(spreadsheet_error)?;
    }
    for (col, label) in table.columns.iter().enumerate() {
        let col = u16::try_from(col).map_err(|_| limit_error())?;
        worksheet
            .write_string(0, col, label)
            .map_err(spreadsheet_error)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = u32::try_from(row_idx + 1).map_err(|_| limit_error())?;
        for (col, value) in row.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| limit_error())?;
            worksheet
                .write_string(row_num, col, value)
                .map_err(spreadsheet_error)?;
        }
    }
    workbook.save(path).map_err(spreadsheet_error)
}
