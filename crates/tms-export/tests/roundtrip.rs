//! Round-trip property: parsing serialized output reproduces the rows.

use proptest::prelude::*;

use tms_core::dates::to_canonical_date;
use tms_export::{CsvStyle, to_csv_string};
use tms_ingest::parse_csv;

/// Printable ASCII cells, quotes and commas and interior spaces included.
/// Newlines are excluded: the lenient parser is line-based by design, so
/// cells with line breaks are out of contract.
fn table_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..5).prop_flat_map(|width| {
        let cell = "[ -~]{0,12}";
        let row = proptest::collection::vec(cell, width..=width);
        (
            proptest::collection::vec(cell, width..=width),
            proptest::collection::vec(row, 1..6),
        )
    })
}

/// What a cell looks like after one parse pass: surrounding whitespace
/// trimmed, then date-normalized.
fn expected_cell(cell: &str) -> String {
    to_canonical_date(cell.trim())
}

proptest! {
    #[test]
    fn quoted_serialization_round_trips((headers, rows) in table_strategy()) {
        let text = to_csv_string(&headers, &rows, CsvStyle::Quoted).expect("serialize");
        let parsed = parse_csv(&text);

        let mut expected: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
        expected.push(headers.iter().map(|cell| expected_cell(cell)).collect());
        for row in &rows {
            expected.push(row.iter().map(|cell| expected_cell(cell)).collect());
        }
        // Rows whose cells are all empty serialize to a blank-looking line
        // of quotes; the always-quote style keeps them visible to the
        // parser, so counts must match exactly.
        assert_eq!(parsed, expected);
    }
}
