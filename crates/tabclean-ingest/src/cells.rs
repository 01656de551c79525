//! Empty-cell collapse.
//!
//! Loaders hand every raw cell through [`collapse_empty`]. Only a missing cell
//! or the exact empty string becomes [`CellValue::Absent`]; whitespace-only
//! text and words such as `"NA"` or `"Null"` stay text.

use tabclean_model::CellValue;

/// Maps a raw cell to a [`CellValue`], collapsing `""` into absent.
pub fn collapse_empty(raw: Option<&str>) -> CellValue {
    match raw {
        None | Some("") => CellValue::Absent,
        Some(value) => CellValue::text(value),
    }
}
