//! Validation issues reported as data, never as `Err`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable discriminant for a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The file parsed to zero rows.
    EmptyFile,
    /// A configured required header is absent from the header row.
    MissingHeader,
    /// The same header name (case-insensitive) appears more than once.
    DuplicateHeader,
    /// A data row's cell count differs from the header width.
    ColumnCountMismatch,
    /// A required field is empty in a data row.
    RequiredValueMissing,
    /// A numeric field holds a value that does not parse as a number.
    NonNumericValue,
}

/// A single validation finding.
///
/// `row` and `column` are 1-based; the header row is row 1, so the first data
/// row is row 2. Position fields are absent for file- and header-level
/// findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub kind: IssueKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
}

impl ValidationError {
    pub fn empty_file() -> Self {
        Self {
            kind: IssueKind::EmptyFile,
            description: "File is empty".to_string(),
            row: None,
            column: None,
            current_value: None,
        }
    }

    pub fn missing_header(name: &str) -> Self {
        Self {
            kind: IssueKind::MissingHeader,
            description: format!("Missing required header: {name}"),
            row: None,
            column: None,
            current_value: None,
        }
    }

    pub fn duplicate_headers(names: &[String]) -> Self {
        Self {
            kind: IssueKind::DuplicateHeader,
            description: format!("Duplicate headers found: {}", names.join(", ")),
            row: None,
            column: None,
            current_value: None,
        }
    }

    pub fn column_count_mismatch(row: usize, expected: usize, actual: usize) -> Self {
        Self {
            kind: IssueKind::ColumnCountMismatch,
            description: format!("Row {row} has {actual} columns, expected {expected}"),
            row: Some(row),
            column: None,
            current_value: None,
        }
    }

    pub fn required_value_missing(
        field: &str,
        row: usize,
        column: usize,
        current_value: &str,
    ) -> Self {
        Self {
            kind: IssueKind::RequiredValueMissing,
            description: format!("{field} is required"),
            row: Some(row),
            column: Some(column),
            current_value: Some(current_value.to_string()),
        }
    }

    pub fn non_numeric_value(field: &str, row: usize, column: usize, current_value: &str) -> Self {
        Self {
            kind: IssueKind::NonNumericValue,
            description: format!("{field} must be a valid number"),
            row: Some(row),
            column: Some(column),
            current_value: Some(current_value.to_string()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "Row {row}: {}", self.description),
            None => write!(f, "{}", self.description),
        }
    }
}
