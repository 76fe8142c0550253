//! Numeric cell interpretation.

/// Returns true if the value parses as a number once thousands-separator
/// commas are stripped.
///
/// `"1,234.50"` is numeric, `"12a"` is not. Empty values are not numeric;
/// callers that treat empty as "absent" must check for emptiness first.
pub fn is_numeric_value(value: &str) -> bool {
    let cleaned = value.trim().replace(',', "");
    !cleaned.is_empty() && cleaned.parse::<f64>().is_ok()
}
