//! Per-file cleaning stages: ingest, process, output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tabclean_core::{Normalized, normalize, resolve_columns};
use tabclean_ingest::{LoadOptions, LoadedTable, load_table};
use tabclean_output::{WriteOptions, output_path, write_table};
use tracing::{Level, debug, enabled, error, info, info_span, trace};

use crate::logging::redact_value;
use crate::types::{CleanResult, ColumnResolution, FileFailure, FileSummary};

/// Settings shared by every file of one `clean` run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Folder for cleaned files; the input's own folder when `None`.
    pub output_dir: Option<PathBuf>,
    pub prefix: String,
    pub sheet: Option<String>,
    pub dry_run: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            prefix: tabclean_output::DEFAULT_PREFIX.to_string(),
            sheet: None,
            dry_run: false,
        }
    }
}

/// Stage 1: read the input file.
pub fn ingest(input: &Path, sheet: Option<&str>) -> Result<LoadedTable> {
    let options = LoadOptions::default().with_sheet(sheet.map(str::to_string));
    load_table(input, &options).with_context(|| format!("load {}", input.display()))
}

/// Stage 2: normalize the loaded table.
pub fn process(loaded: &LoadedTable) -> Normalized {
    let normalized = normalize(&loaded.table);
    for source in normalized.sources.iter().filter(|source| source.is_merged()) {
        debug!(
            column = %source.label,
            sources = ?source.labels,
            "merged columns"
        );
    }
    if enabled!(Level::TRACE) {
        for (index, row) in normalized.table.rows.iter().enumerate() {
            let values = row.join("|");
            trace!(row = index, values = %redact_value(&values), "cleaned row");
        }
    }
    normalized
}

/// Where the cleaned copy of `input` goes.
pub fn resolve_output_path(input: &Path, options: &CleanOptions) -> Result<PathBuf> {
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    output_path(input, &output_dir, &options.prefix)
        .with_context(|| format!("name output for {}", input.display()))
}

/// Stage 3: write the cleaned table.
pub fn output(loaded: &LoadedTable, normalized: &Normalized, path: &Path) -> Result<()> {
    let options = WriteOptions {
        sheet: loaded.sheet.clone(),
    };
    write_table(path, loaded.format, &normalized.table, &options)
        .with_context(|| format!("write {}", path.display()))
}

/// Runs all stages for one file.
pub fn clean_file(input: &Path, options: &CleanOptions) -> Result<FileSummary> {
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();

    let loaded = ingest(input, options.sheet.as_deref())?;
    let normalized = process(&loaded);
    let written = if options.dry_run {
        None
    } else {
        let path = resolve_output_path(input, options)?;
        output(&loaded, &normalized, &path)?;
        Some(path)
    };
    info!(
        output = ?written,
        rows = normalized.report.output_rows,
        duplicate_rows = normalized.report.duplicate_rows,
        "file cleaned"
    );
    Ok(FileSummary {
        input: input.to_path_buf(),
        output: written,
        format: loaded.format,
        sheet: loaded.sheet,
        report: normalized.report,
    })
}

/// Cleans every input in order. A failing file is recorded and the rest
/// still run.
pub fn clean_files(inputs: &[PathBuf], options: &CleanOptions) -> CleanResult {
    let span = info_span!("run", file_count = inputs.len(), dry_run = options.dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let mut files = Vec::new();
    let mut errors = Vec::new();
    for input in inputs {
        match clean_file(input, options) {
            Ok(summary) => files.push(summary),
            Err(err) => {
                let message = format!("{err:#}");
                error!(input = %input.display(), error = %message, "failed to clean file");
                errors.push(FileFailure {
                    input: input.clone(),
                    message,
                });
            }
        }
    }
    info!(
        cleaned = files.len(),
        failed = errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    let has_errors = !errors.is_empty();
    CleanResult {
        files,
        errors,
        has_errors,
    }
}

/// Lists how each input column resolves, without cleaning anything.
pub fn inspect_columns(input: &Path, sheet: Option<&str>) -> Result<Vec<ColumnResolution>> {
    let loaded = ingest(input, sheet)?;
    let columns = &loaded.table.columns;
    Ok(resolve_columns(columns)
        .into_iter()
        .zip(columns)
        .enumerate()
        .map(|(position, (assignment, label))| ColumnResolution {
            position,
            label: label.clone(),
            key: assignment.key,
            canonical_label: assignment.canonical_label,
        })
        .collect())
}
