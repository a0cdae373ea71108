//! Terminal rendering of census views.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use census_core::{CensusRow, CensusView, Column, ReportVariant, SortKeys};
use census_model::Record;
use census_parse::{ExtractionRule, Rejection};

/// Header text with the column's sort position and direction, e.g. `LOS ▲1`.
pub fn header_label(column: Column, keys: &SortKeys) -> String {
    match keys.position(column) {
        Some(idx) => {
            let arrow = if keys.as_slice()[idx].direction.is_ascending() {
                '▲'
            } else {
                '▼'
            };
            format!("{} {arrow}{}", column.label(), idx + 1)
        }
        None => column.label().to_string(),
    }
}

pub fn census_table(view: &CensusView) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.columns
            .iter()
            .map(|&column| header_cell(&header_label(column, &view.keys))),
    );
    apply_census_table_style(&mut table);
    if let Some(idx) = view.columns.iter().position(|c| *c == Column::LengthOfStay) {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for (idx, row) in view.rows.iter().enumerate() {
        let priority = idx < view.priority_len;
        table.add_row(
            view.columns
                .iter()
                .map(|&column| row_cell(row, column, priority)),
        );
    }
    table
}

/// One-line summary printed under the table.
pub fn summary_line(view: &CensusView) -> String {
    let stats = view.stats;
    let mut line = format!(
        "{} of {} lines parsed, {} rejected, {} marked",
        stats.parsed, stats.lines_seen, stats.rejected, stats.marked
    );
    if view.priority_len > 0 {
        line.push_str(&format!(", {} in priority group", view.priority_len));
    }
    line.push_str(&format!(" | sort: {}", view.keys));
    line
}

pub fn variants_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variant"),
        header_cell("Description"),
        header_cell("Columns"),
        header_cell("Default sort"),
    ]);
    apply_table_style(&mut table);
    for variant in ReportVariant::ALL {
        let columns = variant
            .columns()
            .iter()
            .map(Column::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(variant.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(variant.description()),
            Cell::new(columns),
            Cell::new(variant.default_sort_keys().to_string()),
        ]);
    }
    table
}

/// Rule-by-rule breakdown of one parsed line.
pub fn explain_table(result: &Result<Record, Rejection>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Value")]);
    apply_table_style(&mut table);
    match result {
        Ok(record) => {
            for rule in ExtractionRule::ORDER {
                let value = record.display(rule.column());
                let value_cell = if value.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(value)
                };
                table.add_row(vec![Cell::new(rule.as_str()), value_cell]);
            }
            let marked = if record.is_marked() { "yes" } else { "no" };
            table.add_row(vec![Cell::new("marked"), Cell::new(marked)]);
        }
        Err(rejection) => {
            let rule = rejection.rule().map_or("-", |rule| rule.as_str());
            table.add_row(vec![
                Cell::new(rule),
                Cell::new(format!("rejected: {rejection}")).fg(Color::Red),
            ]);
        }
    }
    table
}

fn row_cell(row: &CensusRow, column: Column, priority: bool) -> Cell {
    let cell = Cell::new(row.cell(column));
    let cell = if row.marked {
        cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        cell
    };
    if priority && column == Column::LengthOfStay {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn apply_census_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
