//! CSV serialization for the re-upload path.
//!
//! After in-browser edits a table goes back to the backend as a `text/csv`
//! blob. Serialization is deliberately asymmetric with parsing: the parser
//! is lenient about quoting, the canonical writer always quotes. Two
//! historical wire shapes exist among consuming backends, so the
//! non-canonical one survives as an explicit named option rather than being
//! chosen silently.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use tms_model::Row;

/// MIME type of serialized output.
pub const CSV_MIME: &str = "text/csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Write(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Flush(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Serialization style for CSV output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvStyle {
    /// Canonical form: every cell quoted, internal quotes doubled,
    /// LF-terminated records.
    #[default]
    Quoted,
    /// Legacy form for backends that reject blanket quoting: cells quoted
    /// only when they contain a comma, quote, or line break; CRLF-terminated
    /// records.
    Minimal,
}

/// Serializes headers and rows to a CSV byte blob.
///
/// # Errors
///
/// Returns [`ExportError`] when the underlying writer fails; with an
/// in-memory buffer that only happens on pathological inputs, but the
/// contract stays explicit.
pub fn write_csv(headers: &[String], rows: &[Row], style: CsvStyle) -> Result<Vec<u8>> {
    let mut builder = WriterBuilder::new();
    match style {
        CsvStyle::Quoted => builder
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::Any(b'\n')),
        CsvStyle::Minimal => builder
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::CRLF),
    };
    let mut writer = builder.from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .into_inner()
        .map_err(|error| ExportError::Flush(error.to_string()))
}

/// Serializes to a `String` for callers assembling text bodies directly.
pub fn to_csv_string(headers: &[String], rows: &[Row], style: CsvStyle) -> Result<String> {
    let bytes = write_csv(headers, rows, style)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
