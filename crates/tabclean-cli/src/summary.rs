use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabclean_cli::types::CleanResult;

use crate::cli::SummaryFormatArg;

pub fn print_summary(result: &CleanResult, format: SummaryFormatArg) -> Result<()> {
    match format {
        SummaryFormatArg::Json => {
            let json = serde_json::to_string_pretty(result).context("serialize summary")?;
            println!("{json}");
        }
        SummaryFormatArg::Table => print_summary_table(result),
    }
    Ok(())
}

fn print_summary_table(result: &CleanResult) {
    if !result.files.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("File"),
            header_cell("Rows in"),
            header_cell("Rows out"),
            header_cell("Columns"),
            header_cell("Merged"),
            header_cell("Duplicates"),
            header_cell("Null cells"),
            header_cell("Output"),
        ]);
        apply_summary_table_style(&mut table);
        for index in 1..=6 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for summary in &result.files {
            let report = &summary.report;
            table.add_row(vec![
                Cell::new(file_label(&summary.input, summary.sheet.as_deref()))
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(report.input_rows),
                Cell::new(report.output_rows),
                Cell::new(format!("{} -> {}", report.input_columns, report.output_columns)),
                count_cell(report.merged_columns, Color::Yellow),
                count_cell(report.duplicate_rows, Color::Yellow),
                count_cell(report.filled_cells, Color::Cyan),
                output_cell(summary.output.as_deref()),
            ]);
        }
        println!("{table}");
    }
    for failure in &result.errors {
        eprintln!(
            "error: failed to clean {}: {}",
            failure.input.display(),
            failure.message
        );
    }
}

fn file_label(input: &Path, sheet: Option<&str>) -> String {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| input.display().to_string(), str::to_string);
    match sheet {
        Some(sheet) => format!("{name} [{sheet}]"),
        None => name,
    }
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
