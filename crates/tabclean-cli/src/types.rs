use std::path::PathBuf;

use serde::Serialize;
use tabclean_ingest::SourceFormat;
use tabclean_model::NormalizeReport;

#[derive(Debug, Serialize)]
pub struct CleanResult {
    pub files: Vec<FileSummary>,
    pub errors: Vec<FileFailure>,
    pub has_errors: bool,
}

#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub format: SourceFormat,
    pub sheet: Option<String>,
    pub report: NormalizeReport,
}

#[derive(Debug, Serialize)]
pub struct FileFailure {
    pub input: PathBuf,
    pub message: String,
}

/// One row of the column resolution listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnResolution {
    pub position: usize,
    pub label: String,
    pub key: String,
    pub canonical_label: String,
}
