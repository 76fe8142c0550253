//! Field-level checks for a single rectangular data row.

use tms_core::numbers::is_numeric_value;
use tms_model::ValidationError;

/// Runs required-field then numeric-field checks over one row.
///
/// Callers guarantee the row matches the header width, so column positions
/// resolved from the header index in advance are valid here.
pub fn check_row(
    row: &[String],
    row_number: usize,
    required: &[(&str, usize)],
    numeric: &[(&str, usize)],
    errors: &mut Vec<ValidationError>,
) {
    for (field, column) in required {
        let value = row[*column].trim();
        if value.is_empty() {
            errors.push(ValidationError::required_value_missing(
                field,
                row_number,
                column + 1,
                value,
            ));
        }
    }
    for (field, column) in numeric {
        let value = row[*column].trim();
        // Empty numeric cells are "absent", which is the required-field
        // check's concern, not a type error.
        if !value.is_empty() && !is_numeric_value(value) {
            errors.push(ValidationError::non_numeric_value(
                field,
                row_number,
                column + 1,
                value,
            ));
        }
    }
}
