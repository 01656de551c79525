use serde::{Deserialize, Serialize};

/// Where an output column came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSource {
    /// Output label: the first-seen label for `key`, trimmed.
    pub label: String,
    pub key: String,
    /// Input column positions folded into this column, left to right.
    pub positions: Vec<usize>,
    /// Input labels at `positions`, as they appeared in the source.
    pub labels: Vec<String>,
}

impl ColumnSource {
    /// Number of input columns merged away into this one.
    pub fn merged_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn is_merged(&self) -> bool {
        self.positions.len() > 1
    }
}
