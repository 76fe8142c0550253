//! End-to-end tests for the ingestion orchestrator.

use std::io::Write;
use std::path::PathBuf;

use tms_model::{FileStatus, IssueKind, ValidationConfig};
use tms_pipeline::{ingest_bytes, ingest_file, ingest_files};

fn statement_config() -> ValidationConfig {
    ValidationConfig::new()
        .with_required_headers(["Name", "Amount"])
        .with_required_fields(["Name"])
        .with_numeric_fields(["Amount"])
}

#[test]
fn valid_csv_reports_success_with_counts() {
    let result = ingest_bytes(
        "statement.csv",
        b"Name,Amount\nJohn,1000\nJane,2,500",
        &statement_config(),
    );
    // Row 3 has three cells after the unquoted thousands separator splits;
    // structural finding only, so the file as a whole fails.
    assert_eq!(result.status, FileStatus::Error);

    let result = ingest_bytes(
        "statement.csv",
        b"Name,Amount\nJohn,1000\nJane,\"2,500\"",
        &statement_config(),
    );
    assert_eq!(result.status, FileStatus::Success);
    assert_eq!(result.row_count, 2);
    assert_eq!(result.column_count, 2);
    assert!(result.has_headers);
    assert!(!result.has_missing_values);
    assert!(result.validation_errors.is_empty());
    assert!(result.error.is_none());
}

#[test]
fn failing_rows_produce_joined_error_message() {
    let result = ingest_bytes("s.csv", b"Name,Amount\nJohn,1000\n,abc", &statement_config());
    assert_eq!(result.status, FileStatus::Error);
    assert_eq!(result.row_count, 2);
    assert!(result.has_missing_values);
    assert_eq!(result.validation_errors.len(), 2);
    assert_eq!(
        result.validation_errors[0].kind,
        IssueKind::RequiredValueMissing
    );
    assert_eq!(result.validation_errors[1].kind, IssueKind::NonNumericValue);
    let message = result.error.expect("joined message");
    assert_eq!(message, "Name is required; Amount must be a valid number");
}

#[test]
fn empty_csv_short_circuits_before_validation() {
    let result = ingest_bytes("empty.csv", b"", &statement_config());
    assert_eq!(result.status, FileStatus::Error);
    assert_eq!(result.error.as_deref(), Some("File is empty"));
    assert!(!result.has_headers);
    assert!(result.validation_errors.is_empty());
}

#[test]
fn header_only_csv_gets_a_distinct_message() {
    let result = ingest_bytes("h.csv", b"Name,Amount\n", &statement_config());
    assert_eq!(result.status, FileStatus::Error);
    assert_eq!(
        result.error.as_deref(),
        Some("File has a header row but no data rows")
    );
    assert!(result.has_headers);
    assert_eq!(result.column_count, 2);
    assert_eq!(result.row_count, 0);
}

#[test]
fn unknown_extension_is_rejected_before_parsing() {
    let result = ingest_bytes("data.txt", b"Name,Amount\nJohn,1", &statement_config());
    assert_eq!(result.status, FileStatus::Error);
    let message = result.error.expect("message");
    assert!(message.contains("Unsupported file format"));
    assert!(message.contains("data.txt"));
}

#[test]
fn corrupt_spreadsheet_becomes_error_result_not_panic() {
    let result = ingest_bytes("book.xlsx", b"not a zip container", &statement_config());
    assert_eq!(result.status, FileStatus::Error);
    assert!(result.error.is_some());
}

#[test]
fn result_serializes_to_camel_case_wire_shape() {
    let result = ingest_bytes("s.csv", b"Name,Amount\n,12a", &statement_config());
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["status"], "error");
    assert_eq!(json["rowCount"], 1);
    assert_eq!(json["columnCount"], 2);
    assert_eq!(json["hasHeaders"], true);
    assert_eq!(json["hasMissingValues"], true);
    assert_eq!(json["validationErrors"][0]["kind"], "required_value_missing");
    assert_eq!(json["validationErrors"][1]["currentValue"], "12a");
}

#[test]
fn serialized_export_ingests_cleanly() {
    let headers: Vec<String> = vec!["Name".into(), "Amount".into()];
    let rows = vec![vec!["John".into(), "1,000.50".into()]];
    let bytes =
        tms_export::write_csv(&headers, &rows, tms_export::CsvStyle::Quoted).expect("serialize");
    let result = ingest_bytes("edited.csv", &bytes, &statement_config());
    assert_eq!(result.status, FileStatus::Success);
    assert_eq!(result.row_count, 1);
}

#[tokio::test]
async fn file_read_feeds_the_same_pipeline() {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    file.write_all(b"Name,Amount\nJohn,1000\n")
        .expect("write csv");
    let result = ingest_file(file.path(), &statement_config()).await;
    assert_eq!(result.status, FileStatus::Success);
    assert_eq!(result.row_count, 1);
}

#[tokio::test]
async fn missing_file_is_a_terminal_read_error() {
    let result = ingest_file(
        std::path::Path::new("/nonexistent/statement.csv"),
        &statement_config(),
    )
    .await;
    assert_eq!(result.status, FileStatus::Error);
    let message = result.error.expect("message");
    assert!(message.contains("Could not read"));
}

#[tokio::test]
async fn batch_results_align_with_input_order() {
    let mut good = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    good.write_all(b"Name,Amount\nJohn,1000\n")
        .expect("write csv");

    let paths = vec![
        PathBuf::from("/nonexistent/a.csv"),
        good.path().to_path_buf(),
        PathBuf::from("unsupported.txt"),
    ];
    let results = ingest_files(&paths, &statement_config()).await;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, FileStatus::Error);
    assert_eq!(results[1].status, FileStatus::Success);
    assert_eq!(results[2].status, FileStatus::Error);
    assert!(
        results[2]
            .error
            .as_deref()
            .expect("message")
            .contains("Could not read")
    );
}
