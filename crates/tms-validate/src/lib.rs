//! Schema validation of parsed rows.
//!
//! Validation is pure and total: it never fails and always returns the full
//! accumulated list of findings. Errors are data for the display layer, not
//! control flow. Row and column numbers are 1-based with the header as
//! row 1, matching how users count rows in their spreadsheet.

mod headers;
mod rows;

pub use headers::HeaderIndex;

use tms_model::{Row, ValidationConfig, ValidationError};

/// Validates parsed rows against a declarative schema.
///
/// Output order: header-level findings first, then per-row findings in row
/// order; within a row, required-field findings in config order, then
/// numeric-field findings in config order. A row whose cell count differs
/// from the header width gets a single structural finding and no
/// field-level checks.
pub fn validate(rows: &[Row], config: &ValidationConfig) -> Vec<ValidationError> {
    if rows.is_empty() {
        return vec![ValidationError::empty_file()];
    }

    let header_row = &rows[0];
    let index = HeaderIndex::build(header_row);

    let mut errors = Vec::new();
    headers::check_required(&index, &config.required_headers, &mut errors);
    headers::check_duplicates(header_row, &mut errors);

    // Resolve field names to column positions once; fields whose header is
    // absent were already reported above and are skipped per row.
    let required = index.resolve(&config.required_fields);
    let numeric = index.resolve(&config.numeric_fields);

    for (offset, row) in rows.iter().enumerate().skip(1) {
        let row_number = offset + 1;
        if row.len() != header_row.len() {
            errors.push(ValidationError::column_count_mismatch(
                row_number,
                header_row.len(),
                row.len(),
            ));
            continue;
        }
        rows::check_row(row, row_number, &required, &numeric, &mut errors);
    }

    tracing::debug!(
        rows = rows.len() - 1,
        findings = errors.len(),
        "validated rows against schema"
    );
    errors
}
