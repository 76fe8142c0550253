//! Result shapes shared between commands, summary rendering and JSON output.

use std::path::PathBuf;

use serde::Serialize;

use tms_model::ParsedFileResult;

/// Outcome of `tms check` over a batch of files.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub files: Vec<FileReport>,
}

impl CheckOutcome {
    /// True if any file in the batch failed.
    pub fn has_failures(&self) -> bool {
        !self.files.iter().all(|report| report.result.status.is_success())
    }
}

/// One file's ingestion result, tagged with its path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub result: ParsedFileResult,
}
