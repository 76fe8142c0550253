//! Declarative validation schema for uploaded tabular files.

use serde::{Deserialize, Serialize};

/// Schema a parsed file is validated against.
///
/// Each upload feature (bank statements, FX proposals, master data) supplies
/// its own config; the validator treats all of them uniformly. Header name
/// matching is case-insensitive throughout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    /// Column names that must appear in the header row, in declaration order.
    pub required_headers: Vec<String>,
    /// Headers whose value must be non-empty in every data row.
    pub required_fields: Vec<String>,
    /// Headers whose value must parse as a number (thousands separators
    /// tolerated).
    pub numeric_fields: Vec<String>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_required_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_required_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_numeric_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numeric_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}
