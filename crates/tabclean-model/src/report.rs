use serde::{Deserialize, Serialize};

/// Counts gathered while normalizing a single table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeReport {
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    /// Physical columns folded into an earlier column with the same key.
    pub merged_columns: usize,
    /// Cells whose text changed when trimmed.
    pub trimmed_cells: usize,
    /// Rows dropped as exact duplicates of an earlier row.
    pub duplicate_rows: usize,
    /// Absent cells replaced by the sentinel.
    pub filled_cells: usize,
}

impl NormalizeReport {
    pub fn is_unchanged(&self) -> bool {
        self.merged_columns == 0
            && self.trimmed_cells == 0
            && self.duplicate_rows == 0
            && self.filled_cells == 0
    }
}
