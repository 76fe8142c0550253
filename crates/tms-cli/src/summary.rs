//! Terminal rendering of check results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tms_model::IssueKind;

use crate::types::CheckOutcome;

pub fn print_check(outcome: &CheckOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Status"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Issues"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for report in &outcome.files {
        let result = &report.result;
        table.add_row(vec![
            Cell::new(report.path.display()),
            status_cell(result.status.is_success()),
            Cell::new(result.row_count),
            Cell::new(result.column_count),
            count_cell(result.validation_errors.len()),
            Cell::new(result.error.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");
    print_issue_table(outcome);
}

fn print_issue_table(outcome: &CheckOutcome) {
    let mut issues = Vec::new();
    for report in &outcome.files {
        for error in &report.result.validation_errors {
            issues.push((report.path.display().to_string(), error));
        }
    }
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Kind"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (file, error) in issues {
        table.add_row(vec![
            Cell::new(file),
            kind_cell(error.kind),
            position_cell(error.row),
            position_cell(error.column),
            Cell::new(error.current_value.as_deref().unwrap_or("-")),
            Cell::new(&error.description),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(success: bool) -> Cell {
    if success {
        Cell::new("ok").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn position_cell(position: Option<usize>) -> Cell {
    match position {
        Some(value) => Cell::new(value),
        None => Cell::new("-").add_attribute(Attribute::Dim),
    }
}

fn kind_cell(kind: IssueKind) -> Cell {
    let label = match kind {
        IssueKind::EmptyFile => "empty file",
        IssueKind::MissingHeader => "missing header",
        IssueKind::DuplicateHeader => "duplicate header",
        IssueKind::ColumnCountMismatch => "column count",
        IssueKind::RequiredValueMissing => "required",
        IssueKind::NonNumericValue => "not a number",
    };
    Cell::new(label)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
