//! End-to-end behavior of the normalization pipeline.

use tabclean_core::{NULL_SENTINEL, normalize};
use tabclean_model::{CellValue, Table};

fn table(columns: &[&str], rows: &[&[Option<&str>]]) -> Table {
    Table::try_from_rows(
        columns.iter().map(|c| (*c).to_string()).collect(),
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(CellValue::Absent, CellValue::text))
                    .collect()
            })
            .collect(),
    )
    .expect("rectangular table")
}

fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
        .collect()
}

#[test]
fn merges_score_columns_and_keeps_case_distinct_rows() {
    // Empty cells arrive from the loader as absent.
    let input = table(
        &["Name", "Score", "score.1"],
        &[
            &[Some("Ann"), None, Some("90")],
            &[Some("ann "), Some("85"), None],
            &[Some("Ann"), Some("85"), Some("90")],
        ],
    );
    let result = normalize(&input);
    assert_eq!(result.table.columns, vec!["Name", "Score"]);
    assert_eq!(
        result.table.rows,
        strings(&[&["Ann", "90"], &["ann", "85"], &["Ann", "85"]])
    );
    assert_eq!(result.report.merged_columns, 1);
    assert_eq!(result.report.duplicate_rows, 0);
    assert_eq!(result.report.filled_cells, 0);
    assert_eq!(result.report.trimmed_cells, 1);
}

#[test]
fn collapsed_empty_and_missing_rows_dedupe_to_one_null_row() {
    let input = table(&["Note"], &[&[None], &[None]]);
    let result = normalize(&input);
    assert_eq!(result.table.columns, vec!["Note"]);
    assert_eq!(result.table.rows, strings(&[&[NULL_SENTINEL]]));
    assert_eq!(result.report.duplicate_rows, 1);
    assert_eq!(result.report.filled_cells, 1);
}

#[test]
fn trims_before_deduplicating() {
    let input = table(&["A", "B"], &[&[Some("a"), Some("b")], &[Some("a "), Some(" b")]]);
    let result = normalize(&input);
    assert_eq!(result.table.rows, strings(&[&["a", "b"]]));
    assert_eq!(result.report.duplicate_rows, 1);
}

#[test]
fn merges_before_deduplicating() {
    // Same logical row, value placed in a different physical duplicate column.
    let input = table(
        &["Id", "Score", "SCORE.1"],
        &[&[Some("1"), Some("7"), None], &[Some("1"), None, Some("7")]],
    );
    let result = normalize(&input);
    assert_eq!(result.table.columns, vec!["Id", "Score"]);
    assert_eq!(result.table.rows, strings(&[&["1", "7"]]));
}

#[test]
fn equivalent_labels_collapse_to_first_seen_label() {
    let input = table(
        &[" Score ", "score", "Score.1"],
        &[&[None, None, Some("3")], &[None, Some("2"), Some("3")]],
    );
    let result = normalize(&input);
    assert_eq!(result.table.columns, vec!["Score"]);
    assert_eq!(result.table.rows, strings(&[&["3"], &["2"]]));
    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].key, "score");
    assert_eq!(result.sources[0].positions, vec![0, 1, 2]);
    assert_eq!(result.sources[0].labels, vec![" Score ", "score", "Score.1"]);
}

#[test]
fn keeps_first_seen_column_and_row_order() {
    let input = table(
        &["b", "a", "B.1"],
        &[
            &[Some("2"), Some("x"), None],
            &[None, Some("y"), Some("1")],
            &[Some("2"), Some("x"), Some("9")],
        ],
    );
    let result = normalize(&input);
    assert_eq!(result.table.columns, vec!["b", "a"]);
    assert_eq!(result.table.rows, strings(&[&["2", "x"], &["1", "y"]]));
}

#[test]
fn whitespace_only_cells_become_empty_strings_not_null() {
    let input = table(&["A"], &[&[Some("   ")], &[None]]);
    let result = normalize(&input);
    assert_eq!(result.table.rows, strings(&[&[""], &[NULL_SENTINEL]]));
}

#[test]
fn literal_null_text_is_kept_apart_from_absent_until_fill() {
    let input = table(&["A"], &[&[Some("Null")], &[None]]);
    let result = normalize(&input);
    // Both rows survive dedupe; they only look alike after the fill stage.
    assert_eq!(result.table.rows, strings(&[&["Null"], &["Null"]]));
    assert_eq!(result.report.duplicate_rows, 0);
}

#[test]
fn normalizing_twice_is_stable() {
    let input = table(
        &["Name", "name.1", " City"],
        &[
            &[Some(" Ann"), Some("x"), None],
            &[None, Some("Bo"), Some("Oslo ")],
            &[Some("Ann"), None, None],
        ],
    );
    let once = normalize(&input);
    let twice = normalize(&Table::from(once.table.clone()));
    assert_eq!(twice.table, once.table);
    assert!(twice.report.is_unchanged());
}
