use anyhow::Result;
use comfy_table::Table;

use tabclean_cli::pipeline::{CleanOptions, clean_files, inspect_columns};
use tabclean_cli::types::CleanResult;

use crate::cli::{CleanArgs, ColumnsArgs};
use crate::summary::apply_table_style;

pub fn run_clean(args: &CleanArgs) -> CleanResult {
    let options = CleanOptions {
        output_dir: args.output_dir.clone(),
        prefix: args.prefix.clone(),
        sheet: args.sheet.clone(),
        dry_run: args.dry_run,
    };
    clean_files(&args.inputs, &options)
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let columns = inspect_columns(&args.input, args.sheet.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Label", "Key", "Output column"]);
    apply_table_style(&mut table);
    for column in columns {
        let label = if column.label.is_empty() {
            "(empty)".to_string()
        } else {
            format!("{:?}", column.label)
        };
        table.add_row(vec![
            column.position.to_string(),
            label,
            column.key,
            column.canonical_label,
        ]);
    }
    println!("{table}");
    Ok(())
}
