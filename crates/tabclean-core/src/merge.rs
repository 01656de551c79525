//! Folding physical columns that share a key into one logical column.

use std::collections::BTreeMap;

use tabclean_model::{CellValue, ColumnSource, Table};

use crate::keys::ColumnAssignment;

/// Table after duplicate columns have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTable {
    pub sources: Vec<ColumnSource>,
    pub rows: Vec<Vec<CellValue>>,
}

impl MergedTable {
    pub fn labels(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|source| source.label.clone())
            .collect()
    }
}

/// Groups input columns by key, in the order keys were first seen.
pub fn group_columns(table: &Table, assignments: &[ColumnAssignment]) -> Vec<ColumnSource> {
    let mut group_index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut sources: Vec<ColumnSource> = Vec::new();
    for (position, (label, assignment)) in table.columns.iter().zip(assignments).enumerate() {
        let index = *group_index
            .entry(assignment.key.as_str())
            .or_insert_with(|| {
                sources.push(ColumnSource {
                    label: assignment.canonical_label.clone(),
                    key: assignment.key.clone(),
                    positions: Vec::new(),
                    labels: Vec::new(),
                });
                sources.len() - 1
            });
        let source = &mut sources[index];
        source.positions.push(position);
        source.labels.push(label.clone());
    }
    sources
}

/// Merges every row: per logical column, the leftmost non-absent cell wins.
pub fn merge_columns(table: &Table, assignments: &[ColumnAssignment]) -> MergedTable {
    let sources = group_columns(table, assignments);
    let rows = table
        .rows
        .iter()
        .map(|row| {
            sources
                .iter()
                .map(|source| merge_cell(row, &source.positions))
                .collect()
        })
        .collect();
    MergedTable { sources, rows }
}

fn merge_cell(row: &[CellValue], positions: &[usize]) -> CellValue {
    positions
        .iter()
        .filter_map(|&position| row.get(position))
        .find(|cell| !cell.is_absent())
        .cloned()
        .unwrap_or(CellValue::Absent)
}
