#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single cell: either text or absent.
///
/// `Absent` is distinct from every string, including `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Absent,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

/// Raw table as handed over by a loader.
///
/// Rows are expected to hold one cell per column. Use [`Table::try_from_rows`]
/// when the shape is not already guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table, rejecting rows whose width differs from the header.
    pub fn try_from_rows(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let expected = columns.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(ModelError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Normalized table. Every cell holds a string; absence cannot be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CleanTable {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

impl From<CleanTable> for Table {
    fn from(table: CleanTable) -> Self {
        Self {
            columns: table.columns,
            rows: table
                .rows
                .into_iter()
                .map(|row| row.into_iter().map(CellValue::Text).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_rows_rejects_ragged_rows() {
        let columns = vec!["A".to_string(), "B".to_string()];
        let rows = vec![
            vec![CellValue::from("1"), CellValue::from("2")],
            vec![CellValue::from("3")],
        ];
        let err = Table::try_from_rows(columns, rows).unwrap_err();
        assert_eq!(
            err,
            ModelError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn absent_differs_from_empty_text() {
        assert_ne!(CellValue::Absent, CellValue::text(""));
        assert!(CellValue::Absent.is_absent());
        assert_eq!(CellValue::text("x").as_text(), Some("x"));
        assert_eq!(CellValue::from(None::<String>), CellValue::Absent);
    }
}
