//! Whitespace trimming of merged cells.

use tabclean_model::CellValue;

/// Strips surrounding whitespace from text. Absent cells are left alone.
pub fn trim_cell(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) => CellValue::Text(value.trim().to_string()),
        CellValue::Absent => CellValue::Absent,
    }
}

/// Trims every cell in place and returns how many cells changed.
pub fn trim_rows(rows: &mut [Vec<CellValue>]) -> usize {
    let mut changed = 0usize;
    for cell in rows.iter_mut().flatten() {
        if let CellValue::Text(value) = cell {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
                changed += 1;
            }
        }
    }
    changed
}
