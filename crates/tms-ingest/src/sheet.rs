//! Binary spreadsheet (XLSX/XLS) parsing.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use tms_core::dates::{is_date_serial, serial_to_canonical, to_canonical_date};
use tms_model::Row;

use crate::error::{IngestError, Result};

/// Parses spreadsheet bytes into rows of cells, dates normalized.
///
/// Reads the first worksheet only. Rows that are entirely empty are dropped;
/// remaining rows keep the sheet's rectangular width with empty-string fill
/// for blank cells. The first kept row is treated as the header and is
/// stringified with no date handling; every later cell goes through the
/// date normalizer.
///
/// # Errors
///
/// Returns [`IngestError`] when the bytes are not a readable spreadsheet
/// container or the workbook has no worksheets.
pub fn parse_sheet(bytes: &[u8]) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::NoWorksheet)?;
    let range = workbook.worksheet_range(&sheet_name)?;
    let rows = rows_from_range(&range);
    tracing::debug!(sheet = %sheet_name, rows = rows.len(), "parsed spreadsheet");
    Ok(rows)
}

/// Converts a cell range to rows, dropping all-empty rows.
fn rows_from_range(range: &Range<Data>) -> Vec<Row> {
    let mut rows = Vec::new();
    for cells in range.rows() {
        if cells.iter().all(is_empty_cell) {
            continue;
        }
        let row: Row = if rows.is_empty() {
            cells.iter().map(header_cell).collect()
        } else {
            cells.iter().map(data_cell).collect()
        };
        rows.push(row);
    }
    rows
}

fn is_empty_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Header cells carry the formatted display text, trimmed, no date handling.
fn header_cell(cell: &Data) -> String {
    cell.to_string().trim().to_string()
}

/// Data cells are date-aware: typed date cells and numbers in the serial
/// range decode through the 1900-epoch system, text goes through the string
/// normalizer, everything else is stringified and trimmed.
fn data_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => to_canonical_date(s.trim()),
        Data::Float(n) => {
            if is_date_serial(*n) {
                serial_to_canonical(*n).unwrap_or_else(|| format_number(*n))
            } else {
                format_number(*n)
            }
        }
        Data::Int(n) => {
            let as_float = *n as f64;
            if is_date_serial(as_float) {
                serial_to_canonical(as_float).unwrap_or_else(|| n.to_string())
            } else {
                n.to_string()
            }
        }
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            serial_to_canonical(serial).unwrap_or_else(|| format_number(serial))
        }
        Data::DateTimeIso(s) => to_canonical_date(s.trim()),
        other => other.to_string().trim().to_string(),
    }
}

/// Renders a float the way a spreadsheet displays it: integral values
/// without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
