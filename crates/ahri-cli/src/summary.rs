use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MatchRunResult;

pub fn print_summary(result: &MatchRunResult) {
    println!(
        "Catalog: {} pieces of equipment, {} certification records ({} index keys)",
        result.equipment_count, result.certification_count, result.index_keys
    );
    if result.duplicate_keys > 0 {
        println!(
            "Warning: {} duplicate certification keys (later records kept)",
            result.duplicate_keys
        );
    }
    match &result.output_path {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (not written)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Topology"),
        header_cell("Code"),
        header_cell("Combinations"),
        header_cell("Matches"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for count in &result.by_topology {
        table.add_row(vec![
            Cell::new(count.topology.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(count.topology.as_code()),
            Cell::new(count.combinations),
            match_cell(count.matches),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.combinations).add_attribute(Attribute::Bold),
        match_cell(result.matches).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.combinations > 0 {
        let rate = (result.matches as f64) / (result.combinations as f64) * 100.0;
        println!("Match rate: {rate:.2}%");
    }

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn match_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        dim_cell(count)
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
