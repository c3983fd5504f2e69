//! Terminal presentation of assessment results and reference tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ckd_model::{Feature, Preset};

use crate::commands::{SchemaEntry, schema_version};
use crate::types::AssessResult;

pub fn print_assessment(result: &AssessResult) {
    println!("Reference: {}", result.reference_path.display());
    println!("Model: {}", result.model_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Feature"),
        header_cell("Value"),
        header_cell("Normalized"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for feature in Feature::ALL {
        let normalized = result
            .normalized
            .get(feature.name())
            .map(|v| format!("{v:.4}"))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(feature.label()),
            Cell::new(result.profile.get(feature)),
            Cell::new(normalized),
        ]);
    }
    println!("{table}");
    println!("Diagnostic Result: {}", result.label.verdict());
}

pub fn print_presets() {
    let mut table = Table::new();
    let mut header = vec![header_cell("Preset"), header_cell("Description")];
    header.extend(Feature::ALL.iter().map(|f| header_cell(f.name())));
    table.set_header(header);
    apply_table_style(&mut table);
    for preset in Preset::ALL {
        let profile = preset.profile();
        let mut row = vec![
            Cell::new(preset.index()).add_attribute(Attribute::Bold),
            Cell::new(preset.description()),
        ];
        row.extend(Feature::ALL.iter().map(|f| Cell::new(profile.get(*f))));
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_schema(entries: &[SchemaEntry]) {
    println!("Feature schema: {}", schema_version());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Label"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    for column in 2..=4 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.name).add_attribute(Attribute::Bold),
            Cell::new(entry.label),
            Cell::new(entry.min),
            Cell::new(entry.max),
            Cell::new(entry.default),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
