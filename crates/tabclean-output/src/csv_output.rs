use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use tabclean_model::CleanTable;

use crate::error::{OutputError, Result};

/// Writes a table as CSV: header row first, minimal quoting.
pub fn write_csv(path: &Path, table: &CleanTable) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(BufWriter::new(file), table).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes CSV to any writer.
pub fn write_csv_to<W: Write>(writer: W, table: &CleanTable) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let table = CleanTable {
            columns: vec!["Name".to_string(), "Note".to_string()],
            rows: vec![vec!["Ann".to_string(), "a, b".to_string()]],
        };
        let mut buffer = Vec::new();
        write_csv_to(&mut buffer, &table).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Name,Note\nAnn,\"a, b\"\n");
    }
}
