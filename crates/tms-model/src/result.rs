//! Per-file ingestion summary consumed by display layers.

use serde::{Deserialize, Serialize};

use crate::issue::ValidationError;

/// Terminal status of a file's ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Success,
    #[default]
    Error,
}

impl FileStatus {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// The orchestrator's output for one ingested file.
///
/// `row_count` counts data rows only (header excluded); `column_count` is the
/// header width; `has_headers` is true iff parsing yielded at least one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFileResult {
    pub status: FileStatus,
    pub row_count: usize,
    pub column_count: usize,
    pub has_headers: bool,
    pub has_missing_values: bool,
    pub validation_errors: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedFileResult {
    /// Terminal failure before any rows were parsed (bad read, unsupported
    /// format, unreadable container, empty file).
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: FileStatus::Error,
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(FileStatus::Success).expect("serialize"),
            serde_json::json!("success")
        );
        assert_eq!(
            serde_json::to_value(FileStatus::Error).expect("serialize"),
            serde_json::json!("error")
        );
    }

    #[test]
    fn failed_result_is_terminal_with_message() {
        let result = ParsedFileResult::failed("File is empty");
        assert_eq!(result.status, FileStatus::Error);
        assert_eq!(result.error.as_deref(), Some("File is empty"));
        assert_eq!(result.row_count, 0);
        assert!(!result.has_headers);
        assert!(result.validation_errors.is_empty());
    }
}
