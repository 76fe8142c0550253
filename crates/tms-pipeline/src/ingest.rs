//! The per-file ingestion pipeline.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info_span, warn};

use tms_ingest::{decode_text, parse_csv, parse_sheet};
use tms_model::{
    FileStatus, IssueKind, ParsedFileResult, Row, ValidationConfig, ValidationError,
};
use tms_validate::validate;

use crate::kind::FileKind;

/// Runs the synchronous pipeline core over in-memory bytes.
///
/// Total: every outcome is a [`ParsedFileResult`], never an `Err` and never
/// a panic. Stages run strictly in sequence; the validator is only invoked
/// once there is a header row and at least one data row.
pub fn ingest_bytes(file_name: &str, bytes: &[u8], config: &ValidationConfig) -> ParsedFileResult {
    let span = info_span!("ingest", file = file_name);
    let _guard = span.enter();
    let started = Instant::now();

    let Some(kind) = FileKind::from_name(file_name) else {
        warn!("unsupported file extension");
        return ParsedFileResult::failed(format!(
            "Unsupported file format: {file_name} (expected .csv, .xlsx or .xls)"
        ));
    };

    let rows = match kind {
        FileKind::Csv => parse_csv(&decode_text(bytes)),
        FileKind::Sheet => match parse_sheet(bytes) {
            Ok(rows) => rows,
            Err(error) => {
                warn!(%error, "spreadsheet parse failed");
                return ParsedFileResult::failed(error.to_string());
            }
        },
    };

    if rows.is_empty() {
        return ParsedFileResult::failed("File is empty");
    }
    let column_count = rows[0].len();
    if rows.len() == 1 {
        return ParsedFileResult {
            status: FileStatus::Error,
            row_count: 0,
            column_count,
            has_headers: true,
            has_missing_values: false,
            validation_errors: Vec::new(),
            error: Some("File has a header row but no data rows".to_string()),
        };
    }

    let result = summarize(&rows, validate(&rows, config));
    debug!(
        rows = result.row_count,
        columns = result.column_count,
        findings = result.validation_errors.len(),
        duration_ms = started.elapsed().as_millis() as u64,
        "ingestion finished"
    );
    result
}

/// Reads one file and runs the pipeline core over its bytes.
///
/// The read is the only suspension point; a failed read becomes a terminal
/// error result, reported once, never retried.
pub async fn ingest_file(path: &Path, config: &ValidationConfig) -> ParsedFileResult {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match tokio::fs::read(path).await {
        Ok(bytes) => ingest_bytes(&file_name, &bytes, config),
        Err(error) => {
            warn!(file = %path.display(), %error, "file read failed");
            ParsedFileResult::failed(format!("Could not read {}: {error}", path.display()))
        }
    }
}

/// Ingests a batch of files concurrently.
///
/// Files complete in any order, but the returned vector is index-aligned
/// with `paths`. Each file's own stages still run strictly in sequence, and
/// one file's failure never disturbs the others.
pub async fn ingest_files(paths: &[PathBuf], config: &ValidationConfig) -> Vec<ParsedFileResult> {
    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.clone();
        let config = config.clone();
        handles.push(tokio::spawn(
            async move { ingest_file(&path, &config).await },
        ));
    }
    let mut results = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(paths) {
        results.push(match handle.await {
            Ok(result) => result,
            Err(error) => aborted_result(path, &error),
        });
    }
    results
}

/// Converts a panicked or cancelled ingestion task into a terminal error
/// result for that file only; the rest of the batch is unaffected.
fn aborted_result(path: &Path, error: &tokio::task::JoinError) -> ParsedFileResult {
    warn!(file = %path.display(), %error, "ingestion task aborted");
    ParsedFileResult::failed(format!("Ingestion of {} aborted: {error}", path.display()))
}

/// Builds the result summary from parsed rows and validation findings.
fn summarize(rows: &[Row], validation_errors: Vec<ValidationError>) -> ParsedFileResult {
    let has_missing_values = validation_errors
        .iter()
        .any(|error| error.kind == IssueKind::RequiredValueMissing);
    let (status, error) = if validation_errors.is_empty() {
        (FileStatus::Success, None)
    } else {
        let joined = validation_errors
            .iter()
            .map(|error| error.description.clone())
            .collect::<Vec<_>>()
            .join("; ");
        (FileStatus::Error, Some(joined))
    };
    ParsedFileResult {
        status,
        row_count: rows.len() - 1,
        column_count: rows[0].len(),
        has_headers: true,
        has_missing_values,
        validation_errors,
        error,
    }
}
