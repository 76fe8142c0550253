//! Header-level checks and name-to-column resolution.

use std::collections::HashMap;

use tms_model::ValidationError;

/// Case-insensitive header lookup, resolved once per file.
///
/// For duplicate header names the first occurrence wins, so field checks
/// read from the leftmost matching column.
#[derive(Debug)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn build(header_row: &[String]) -> Self {
        let mut positions = HashMap::new();
        for (index, name) in header_row.iter().enumerate() {
            let key = normalize(name);
            if !key.is_empty() {
                positions.entry(key).or_insert(index);
            }
        }
        Self { positions }
    }

    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.positions.get(&normalize(name)).copied()
    }

    /// Resolves configured field names to `(display name, column)` pairs,
    /// dropping names with no matching header.
    pub fn resolve<'a>(&self, fields: &'a [String]) -> Vec<(&'a str, usize)> {
        fields
            .iter()
            .filter_map(|name| self.column_of(name).map(|column| (name.as_str(), column)))
            .collect()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Emits one finding per configured header absent from the header row.
pub fn check_required(
    index: &HeaderIndex,
    required_headers: &[String],
    errors: &mut Vec<ValidationError>,
) {
    for name in required_headers {
        if index.column_of(name).is_none() {
            errors.push(ValidationError::missing_header(name));
        }
    }
}

/// Emits one combined finding listing every duplicated non-empty header.
///
/// Duplicates are reported but not discarded; the columns stay addressable
/// by position.
pub fn check_duplicates(header_row: &[String], errors: &mut Vec<ValidationError>) {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for name in header_row {
        let key = normalize(name);
        if !key.is_empty() {
            *seen.entry(key).or_insert(0) += 1;
        }
    }
    let mut duplicates: Vec<String> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    if duplicates.is_empty() {
        return;
    }
    duplicates.sort();
    errors.push(ValidationError::duplicate_headers(&duplicates));
}
