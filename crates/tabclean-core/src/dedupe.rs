use std::collections::BTreeSet;

use tabclean_model::CellValue;

/// Drops every row that exactly repeats an earlier row.
///
/// Comparison is over the full cell tuple: text compares literally and
/// absent only equals absent. Returns the kept rows and the number dropped.
pub fn dedupe_rows(rows: Vec<Vec<CellValue>>) -> (Vec<Vec<CellValue>>, usize) {
    let keep: Vec<bool> = {
        let mut seen = BTreeSet::new();
        rows.iter().map(|row| seen.insert(row.as_slice())).collect()
    };
    let dropped = keep.iter().filter(|kept| !**kept).count();
    let kept = rows
        .into_iter()
        .zip(keep)
        .filter_map(|(row, kept)| kept.then_some(row))
        .collect();
    (kept, dropped)
}
