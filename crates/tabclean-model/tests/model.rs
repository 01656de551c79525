use tabclean_model::{CellValue, CleanTable, ColumnSource, NormalizeReport, Table};

#[test]
fn clean_table_converts_back_to_text_cells() {
    let clean = CleanTable {
        columns: vec!["Note".to_string()],
        rows: vec![vec!["Null".to_string()], vec![String::new()]],
    };
    let table = Table::from(clean);
    assert_eq!(table.columns, vec!["Note"]);
    assert_eq!(table.rows[0], vec![CellValue::text("Null")]);
    assert_eq!(table.rows[1], vec![CellValue::text("")]);
}

#[test]
fn cell_value_serializes_with_kind_tag() {
    let json = serde_json::to_string(&CellValue::text("Ann")).expect("serialize cell");
    assert_eq!(json, r#"{"kind":"Text","value":"Ann"}"#);
    let json = serde_json::to_string(&CellValue::Absent).expect("serialize absent");
    assert_eq!(json, r#"{"kind":"Absent"}"#);
    let round: CellValue = serde_json::from_str(&json).expect("deserialize absent");
    assert!(round.is_absent());
}

#[test]
fn column_source_counts_merged_columns() {
    let source = ColumnSource {
        label: "Score".to_string(),
        key: "score".to_string(),
        positions: vec![1, 2],
        labels: vec!["Score".to_string(), "score.1".to_string()],
    };
    assert!(source.is_merged());
    assert_eq!(source.merged_count(), 1);
}

#[test]
fn default_report_is_unchanged() {
    let report = NormalizeReport::default();
    assert!(report.is_unchanged());
    let report = NormalizeReport {
        filled_cells: 1,
        ..NormalizeReport::default()
    };
    assert!(!report.is_unchanged());
}
