//! Date detection and normalization to the canonical `YYYY-MM-DD` form.
//!
//! Uploaded files carry dates in several ambiguous encodings: ISO strings
//! (sometimes with a time suffix), slash- or dash-delimited day-first
//! strings with 2- or 4-digit years, and numeric spreadsheet serials.
//! Everything recognized is rewritten to `YYYY-MM-DD` before any other use;
//! everything else passes through untouched.
//!
//! # Day-first policy
//!
//! Slash- and dash-delimited dates are always read day-first: `03/04/2024`
//! is 3 April, never 4 March. This is a behavioral contract with the
//! backends consuming the normalized output, not a detection heuristic.

use chrono::{Duration, NaiveDate};

/// Lower bound (exclusive) of the plausible spreadsheet serial range,
/// 1970-01-01 under the 1900 epoch.
const SERIAL_MIN: f64 = 25569.0;

/// Upper bound (exclusive) of the plausible serial range, around year 2064.
const SERIAL_MAX: f64 = 60000.0;

/// Anchor for the 1900-epoch day count. Using 1899-12-30 rather than
/// 1899-12-31 folds in the epoch's historical leap-year quirk.
fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Returns true if the string reads as a date in any recognized form:
/// an ISO `YYYY-MM-DD` prefix, or a day-first delimited date
/// (`D/M/YY(YY)` or `D-M-YY(YY)`).
pub fn is_likely_date(value: &str) -> bool {
    let trimmed = value.trim();
    iso_date_prefix(trimmed).is_some() || parse_delimited(trimmed).is_some()
}

/// Returns true if a numeric cell value falls in the plausible spreadsheet
/// date-serial range (years ~1970-2064 under the 1900 epoch).
pub fn is_date_serial(value: f64) -> bool {
    value > SERIAL_MIN && value < SERIAL_MAX
}

/// Decodes a 1900-epoch spreadsheet serial to `YYYY-MM-DD`.
///
/// Fractional day parts (time of day) are floored away. Returns `None` for
/// non-finite inputs or day counts outside chrono's representable range.
pub fn serial_to_canonical(serial: f64) -> Option<String> {
    if !serial.is_finite() {
        return None;
    }
    let days = Duration::try_days(serial.floor() as i64)?;
    let date = serial_epoch()?.checked_add_signed(days)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Normalizes a cell value to canonical `YYYY-MM-DD` form.
///
/// - An ISO date string is returned as its 10-character date prefix, so a
///   bare `YYYY-MM-DD` is returned unchanged (idempotent) and a datetime
///   suffix is truncated.
/// - A delimited day-first date is re-rendered as `YYYY-MM-DD`; 2-digit
///   years expand with a pivot (`yy > 50` is 19yy, otherwise 20yy).
/// - Anything that fails to parse is returned in its original string form.
///
/// Never fails. Numeric strings are deliberately not treated as serials;
/// only genuinely numeric spreadsheet cells take the serial path.
pub fn to_canonical_date(value: &str) -> String {
    let trimmed = value.trim();
    if let Some(prefix) = iso_date_prefix(trimmed) {
        return prefix.to_string();
    }
    if let Some(date) = parse_delimited(trimmed) {
        return date.format("%Y-%m-%d").to_string();
    }
    value.to_string()
}

/// Returns the leading `YYYY-MM-DD` slice if the value starts with a valid
/// calendar date in ISO layout.
fn iso_date_prefix(value: &str) -> Option<&str> {
    let prefix = value.get(..10)?;
    let bytes = prefix.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = [0usize, 1, 2, 3, 5, 6, 8, 9]
        .iter()
        .all(|&index| bytes[index].is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let year: i32 = prefix[..4].parse().ok()?;
    let month: u32 = prefix[5..7].parse().ok()?;
    let day: u32 = prefix[8..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)?;
    Some(prefix)
}

/// Parses a day-first delimited date (`D/M/YY(YY)` or `D-M-YY(YY)`).
fn parse_delimited(value: &str) -> Option<NaiveDate> {
    let delimiter = if value.contains('/') {
        '/'
    } else if value.contains('-') {
        '-'
    } else {
        return None;
    };
    let parts: Vec<&str> = value.split(delimiter).collect();
    if parts.len() != 3 {
        return None;
    }
    let day = digit_component(parts[0], 1, 2)?;
    let month = digit_component(parts[1], 1, 2)?;
    let year = match parts[2].trim().len() {
        2 => {
            let yy = digit_component(parts[2], 2, 2)?;
            if yy > 50 { 1900 + yy } else { 2000 + yy }
        }
        4 => digit_component(parts[2], 4, 4)?,
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Parses a component of `min..=max` ASCII digits, rejecting signs and
/// anything non-numeric.
fn digit_component(part: &str, min: usize, max: usize) -> Option<u32> {
    let part = part.trim();
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
