//! Lenient delimited-text parsing.
//!
//! This is deliberately not an RFC 4180 parser. Uploaded files come from
//! spreadsheet exports and hand-edited text with uneven quoting, so the
//! scanner is best-effort and total: malformed quoting (an unterminated
//! quote, a stray quote mid-field) degrades into odd field boundaries
//! rather than an error. Callers downstream assume parsing never fails.

use tms_core::dates::to_canonical_date;
use tms_model::Row;

/// Parses CSV text into rows of cells, dates normalized per cell.
///
/// Blank lines are discarded. Commas inside double quotes do not split
/// fields; each field is trimmed, one layer of wrapping quotes is stripped,
/// and doubled quotes inside a wrapped field collapse to one. Rectangularity
/// is not checked here; that is the validator's job.
pub fn parse_csv(text: &str) -> Vec<Row> {
    let rows: Vec<Row> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();
    tracing::debug!(rows = rows.len(), "parsed csv text");
    rows
}

fn parse_line(line: &str) -> Row {
    let mut cells = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                field.push(ch);
            }
            ',' if !in_quotes => {
                cells.push(clean_field(&field));
                field.clear();
            }
            _ => field.push(ch),
        }
    }
    cells.push(clean_field(&field));
    cells
}

/// Trims a raw field, strips one layer of wrapping quotes, collapses doubled
/// quotes, and normalizes dates.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let unwrapped = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].replace("\"\"", "\"")
    } else {
        trimmed.to_string()
    };
    to_canonical_date(unwrapped.trim())
}
