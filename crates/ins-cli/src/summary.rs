//! Terminal tables for catalog listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ins_model::{Catalog, Member};

/// One row per enumeration.
pub fn tables_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Enumeration"),
        header_cell("Description"),
        header_cell("Members"),
        header_cell("Parents"),
        header_cell("Alt. keys"),
        header_cell("References"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);

    for enumeration in catalog.tables() {
        let schema = enumeration.schema();
        let references: Vec<String> = schema
            .references()
            .map(|(key, target)| format!("{key} -> {target}"))
            .collect();
        table.add_row(vec![
            Cell::new(enumeration.name()).add_attribute(Attribute::Bold),
            Cell::new(enumeration.description()),
            Cell::new(enumeration.len()),
            flag_cell(schema.hierarchical),
            flag_cell(schema.has_alternative_keys()),
            if references.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(references.join(", "))
            },
        ]);
    }
    table
}

/// One row per member, in the order given.
pub fn members_table(enumeration: &ins_model::Table, members: &[&Member]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Value"),
        header_cell("Name"),
        header_cell("Description"),
        header_cell("Sort"),
        header_cell("Parent"),
        header_cell("Metadata"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for member in members {
        let metadata: Vec<String> = member
            .metadata()
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        table.add_row(vec![
            dim_cell(member.position()),
            Cell::new(member.id()).fg(Color::Green),
            Cell::new(member.name()),
            Cell::new(member.description()),
            Cell::new(member.sort_order()),
            enumeration
                .parent_of(member)
                .map_or_else(|| dim_cell("-"), |parent| Cell::new(parent.id())),
            if metadata.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(metadata.join("; "))
            },
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
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

fn flag_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
