//! Table normalization pipeline.
//!
//! # Stage Order
//!
//! 1. **Resolve** - assign each input column its identity key
//! 2. **Merge** - fold columns sharing a key, leftmost non-absent cell wins
//! 3. **Trim** - strip surrounding whitespace from every merged cell
//! 4. **Dedupe** - drop rows that repeat an earlier row exactly
//! 5. **Fill** - replace absent cells with the `Null` sentinel
//!
//! Each stage consumes the complete output of the previous one. Dedupe must
//! see merged, trimmed rows, and fill must run after dedupe.

use tabclean_model::{CleanTable, ColumnSource, NormalizeReport, Table};
use tracing::{debug_span, info};

use crate::dedupe::dedupe_rows;
use crate::keys::resolve_columns;
use crate::merge::merge_columns;
use crate::sentinel::fill_absent;
use crate::trim::trim_rows;

/// Result of normalizing one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub table: CleanTable,
    /// One entry per output column, in output order.
    pub sources: Vec<ColumnSource>,
    pub report: NormalizeReport,
}

/// Normalizes a table. The input is left untouched.
///
/// Rows are assumed to have one cell per column; cells past a row's end are
/// treated as absent.
pub fn normalize(table: &Table) -> Normalized {
    let assignments = debug_span!("resolve", columns = table.width())
        .in_scope(|| resolve_columns(&table.columns));

    let merged = debug_span!("merge", rows = table.height())
        .in_scope(|| merge_columns(table, &assignments));
    let sources = merged.sources;
    let mut rows = merged.rows;

    let trimmed_cells = debug_span!("trim").in_scope(|| trim_rows(&mut rows));

    let (rows, duplicate_rows) = debug_span!("dedupe").in_scope(|| dedupe_rows(rows));

    let (rows, filled_cells) = debug_span!("fill").in_scope(|| fill_absent(rows));

    let report = NormalizeReport {
        input_rows: table.height(),
        input_columns: table.width(),
        output_rows: rows.len(),
        output_columns: sources.len(),
        merged_columns: sources.iter().map(ColumnSource::merged_count).sum(),
        trimmed_cells,
        duplicate_rows,
        filled_cells,
    };
    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        input_columns = report.input_columns,
        output_columns = report.output_columns,
        merged_columns = report.merged_columns,
        duplicate_rows = report.duplicate_rows,
        filled_cells = report.filled_cells,
        "normalize complete"
    );

    let columns = sources.iter().map(|source| source.label.clone()).collect();
    Normalized {
        table: CleanTable { columns, rows },
        sources,
        report,
    }
}
