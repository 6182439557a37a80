//! Terminal rendering with comfy-table.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use spdoc_core::{Page, ViewState};
use spdoc_model::{ProcedureRecord, TypeFilter};

/// Placeholder printed instead of an empty table.
pub const NO_RESULTS: &str = "No procedures found";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_listing_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Fixed(34)),
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

/// One-line view of the category controls; the active one is bracketed.
pub fn filter_bar(view: &ViewState) -> String {
    TypeFilter::controls()
        .into_iter()
        .map(|control| {
            if view.is_active(control) {
                format!("[{control}]")
            } else {
                control.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// The procedure list, followed by the details of the expanded card.
pub fn listing_text(page: &Page<'_>) -> String {
    let listing = page.listing();
    if listing.shows_no_results() {
        return NO_RESULTS.to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Procedure"),
        header_cell("Parameters"),
        header_cell("Category"),
        header_cell("Description"),
    ]);
    apply_listing_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for card in listing.cards() {
        let marker = if card.expanded {
            Cell::new("▾").fg(Color::Green)
        } else {
            dim_cell("▸")
        };
        table.add_row(vec![
            marker,
            Cell::new(&card.record.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            params_cell(&card.record.params),
            Cell::new(&card.record.category),
            Cell::new(&card.record.description),
        ]);
    }
    let mut out = table.to_string();
    if let Some(record) = listing.expanded() {
        out.push('\n');
        out.push_str(&procedure_details_text(record));
    }
    out
}

/// Full card for one procedure, details included.
pub fn procedure_details_text(record: &ProcedureRecord) -> String {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell(&record.name), header_cell("")]);
    table.add_row(vec![label_cell("Parameters"), params_cell(&record.params)]);
    table.add_row(vec![label_cell("Type"), Cell::new(record.kind)]);
    table.add_row(vec![label_cell("Category"), Cell::new(&record.category)]);
    table.add_row(vec![label_cell("Description"), Cell::new(&record.description)]);
    table.add_row(vec![label_cell("Returns:"), Cell::new(&record.returns)]);
    table.add_row(vec![label_cell("Used By:"), Cell::new(&record.usage)]);
    if let Some(example) = &record.example {
        table.add_row(vec![
            label_cell("Example:"),
            Cell::new(example).fg(Color::Blue),
        ]);
    }
    table.to_string()
}

/// Visible report cards with their toggle captions; the open panel's
/// details follow the table.
pub fn reports_text(page: &Page<'_>) -> String {
    let reports = page.reports();
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Report"),
        header_cell("File"),
        header_cell("Description"),
        header_cell(""),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut shown = 0usize;
    for (index, card) in page.visible_reports() {
        shown += 1;
        let caption = if reports.is_open(index) {
            Cell::new(reports.caption(index))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            dim_cell(reports.caption(index))
        };
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&card.title).add_attribute(Attribute::Bold),
            Cell::new(&card.file).fg(Color::Cyan),
            Cell::new(&card.description),
            caption,
        ]);
    }
    if shown == 0 {
        return "No reports found".to_string();
    }
    let mut out = table.to_string();
    if let Some(index) = reports.open_index()
        && reports.is_visible(index)
        && let Some(card) = page.catalog().reports().get(index)
    {
        out.push('\n');
        out.push_str(&format!("{}:", card.title));
        for line in &card.details {
            out.push_str(&format!("\n  - {line}"));
        }
    }
    out
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn params_cell(params: &str) -> Cell {
    if params == "No Parameters" {
        dim_cell(params)
    } else {
        Cell::new(params).fg(Color::Yellow)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
