use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Prefix added to cleaned file names unless the caller picks another.
pub const DEFAULT_PREFIX: &str = "cleaned_";

/// Name of the cleaned file for `input`: `<prefix><file name>`.
///
/// `.xls` inputs are renamed to `.xlsx` because only Open XML workbooks are
/// written.
pub fn cleaned_file_name(input: &Path, prefix: &str) -> Result<String> {
    let name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| OutputError::NoFileName {
            path: input.to_path_buf(),
        })?;
    let is_xls = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xls"));
    if is_xls {
        let stem = input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        Ok(format!("{prefix}{stem}.xlsx"))
    } else {
        Ok(format!("{prefix}{name}"))
    }
}

/// Where the cleaned copy of `input` is written inside `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path, prefix: &str) -> Result<PathBuf> {
    Ok(output_dir.join(cleaned_file_name(input, prefix)?))
}
