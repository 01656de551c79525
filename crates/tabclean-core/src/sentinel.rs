//! Final substitution of absent cells.

use tabclean_model::CellValue;

/// Marker written in place of every absent cell.
pub const NULL_SENTINEL: &str = "Null";

pub fn fill_cell(cell: CellValue) -> String {
    match cell {
        CellValue::Text(value) => value,
        CellValue::Absent => NULL_SENTINEL.to_string(),
    }
}

/// Replaces every absent cell with [`NULL_SENTINEL`].
///
/// Returns the string rows and the number of cells that were filled.
pub fn fill_absent(rows: Vec<Vec<CellValue>>) -> (Vec<Vec<String>>, usize) {
    let mut filled = 0usize;
    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    if cell.is_absent() {
                        filled += 1;
                    }
                    fill_cell(cell)
                })
                .collect()
        })
        .collect();
    (rows, filled)
}
