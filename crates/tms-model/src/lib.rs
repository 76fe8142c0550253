pub mod config;
pub mod issue;
pub mod result;

pub use config::ValidationConfig;
pub use issue::{IssueKind, ValidationError};
pub use result::{FileStatus, ParsedFileResult};

/// A single parsed row: an ordered sequence of cell values.
///
/// Row 0 of a parsed table is the header row; all subsequent rows are data
/// rows. Cells are always strings; dates are rewritten to `YYYY-MM-DD` by the
/// parsers before any other use.
pub type Row = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_serializes_camel_case() {
        let error = ValidationError::required_value_missing("Name", 3, 1, "");
        let json = serde_json::to_value(&error).expect("serialize error");
        assert_eq!(json["kind"], "required_value_missing");
        assert_eq!(json["description"], "Name is required");
        assert_eq!(json["row"], 3);
        assert_eq!(json["column"], 1);
        assert_eq!(json["currentValue"], "");
    }

    #[test]
    fn header_errors_omit_position_fields() {
        let error = ValidationError::missing_header("Amount");
        let json = serde_json::to_value(&error).expect("serialize error");
        assert!(json.get("row").is_none());
        assert!(json.get("column").is_none());
        assert!(json.get("currentValue").is_none());
    }

    #[test]
    fn parsed_file_result_round_trips() {
        let result = ParsedFileResult {
            status: FileStatus::Error,
            row_count: 2,
            column_count: 3,
            has_headers: true,
            has_missing_values: true,
            validation_errors: vec![ValidationError::missing_header("Amount")],
            error: Some("Missing required header: Amount".to_string()),
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ParsedFileResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round.status, FileStatus::Error);
        assert_eq!(round.validation_errors.len(), 1);
    }

    #[test]
    fn config_deserializes_from_camel_case_json() {
        let config: ValidationConfig = serde_json::from_str(
            r#"{
                "requiredHeaders": ["Name", "Amount"],
                "requiredFields": ["Name"],
                "numericFields": ["Amount"]
            }"#,
        )
        .expect("deserialize config");
        assert_eq!(config.required_headers, vec!["Name", "Amount"]);
        assert_eq!(config.required_fields, vec!["Name"]);
        assert_eq!(config.numeric_fields, vec!["Amount"]);
    }
}
