use std::fs;
use std::io::Write;

use tabclean_ingest::{IngestError, LoadOptions, SourceFormat, load_table};
use tabclean_model::CellValue;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "{}", contents).unwrap();
    path
}

#[test]
fn loads_csv_with_bom_and_empty_cells() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "scores.csv",
        "\u{feff}Name,Score,score.1\nAnn,,90\nann ,85,\n",
    );
    let loaded = load_table(&path, &LoadOptions::default()).expect("load csv");
    assert_eq!(loaded.format, SourceFormat::Csv);
    assert!(loaded.sheet.is_none());
    assert_eq!(loaded.table.columns, vec!["Name", "Score", "score.1"]);
    assert_eq!(
        loaded.table.rows,
        vec![
            vec![CellValue::text("Ann"), CellValue::Absent, CellValue::text("90")],
            vec![CellValue::text("ann "), CellValue::text("85"), CellValue::Absent],
        ]
    );
}

#[test]
fn uppercase_extension_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "DATA.CSV", "A\n1\n");
    let loaded = load_table(&path, &LoadOptions::default()).expect("load csv");
    assert_eq!(loaded.table.rows, vec![vec![CellValue::text("1")]]);
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", "A\n1\n");
    let err = load_table(&path, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn missing_csv_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = load_table(&dir.path().join("absent.csv"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

fn write_workbook(dir: &TempDir) -> std::path::PathBuf {
    use rust_xlsxwriter::Workbook;

    let path = dir.path().join("book.xlsx");
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.set_name("Summary").unwrap();
    first.write_string(0, 0, "Ignored").unwrap();

    let scores = workbook.add_worksheet();
    scores.set_name("Scores").unwrap();
    scores.write_string(0, 0, "Name").unwrap();
    scores.write_string(0, 1, "Score").unwrap();
    scores.write_string(1, 0, "Ann").unwrap();
    scores.write_number(1, 1, 85.0).unwrap();
    scores.write_string(2, 0, "Bo").unwrap();
    workbook.save(&path).unwrap();
    path
}

#[test]
fn loads_named_worksheet_as_text() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(&dir);
    let options = LoadOptions::default().with_sheet(Some("Scores".to_string()));
    let loaded = load_table(&path, &options).expect("load workbook");
    assert_eq!(loaded.format, SourceFormat::Xlsx);
    assert_eq!(loaded.sheet.as_deref(), Some("Scores"));
    assert_eq!(loaded.table.columns, vec!["Name", "Score"]);
    assert_eq!(
        loaded.table.rows,
        vec![
            vec![CellValue::text("Ann"), CellValue::text("85")],
            vec![CellValue::text("Bo"), CellValue::Absent],
        ]
    );
}

#[test]
fn first_worksheet_is_the_default() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(&dir);
    let loaded = load_table(&path, &LoadOptions::default()).expect("load workbook");
    assert_eq!(loaded.sheet.as_deref(), Some("Summary"));
    assert_eq!(loaded.table.columns, vec!["Ignored"]);
    assert!(loaded.table.rows.is_empty());
}

#[test]
fn unknown_worksheet_lists_available_sheets() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(&dir);
    let options = LoadOptions::default().with_sheet(Some("Missing".to_string()));
    let err = load_table(&path, &options).unwrap_err();
    match err {
        IngestError::SheetNotFound { sheet, available, .. } => {
            assert_eq!(sheet, "Missing");
            assert_eq!(available, "Summary, Scores");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn date_cells_load_in_display_form() {
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("visits.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let date = ExcelDateTime::from_ymd(2023, 1, 15).unwrap();
    sheet.write_string(0, 0, "Visit").unwrap();
    sheet
        .write_datetime_with_format(1, 0, &date, &date_format)
        .unwrap();
    workbook.save(&path).unwrap();

    let loaded = load_table(&path, &LoadOptions::default()).expect("load workbook");
    assert_eq!(
        loaded.table.rows,
        vec![vec![CellValue::text("2023-01-15 00:00:00")]]
    );
}

#[test]
fn unnamed_headers_use_sheet_column_positions() {
    use rust_xlsxwriter::Workbook;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("offset.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 2, "Name").unwrap();
    sheet.write_string(0, 4, "Score").unwrap();
    sheet.write_string(1, 2, "Ann").unwrap();
    sheet.write_string(1, 3, "x").unwrap();
    sheet.write_number(1, 4, 90.0).unwrap();
    workbook.save(&path).unwrap();

    let loaded = load_table(&path, &LoadOptions::default()).expect("load workbook");
    assert_eq!(loaded.table.columns, vec!["Name", "Unnamed: 3", "Score"]);
    assert_eq!(
        loaded.table.rows,
        vec![vec![
            CellValue::text("Ann"),
            CellValue::text("x"),
            CellValue::text("90"),
        ]]
    );
}
