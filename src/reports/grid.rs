use agegrid::view::ViewLayout;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

/// Prints the grid the way the chart stacks it: one column per group key,
/// row 0 at the bottom.
pub fn print_view(name: &str, view: &ViewLayout) {
    println!("\nView: {} ({})", name, view.title);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled);

    let min = view.bounds.min_group_key;
    let max = view.bounds.max_group_key;

    let mut header = vec![Cell::new("#").add_attribute(Attribute::Bold)];
    header.extend((min..=max).map(|k| {
        Cell::new(k)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center)
    }));
    table.set_header(header);

    for row in (0..view.bounds.max_row_count).rev() {
        let mut cells = vec![Cell::new(row)];
        cells.extend((min..=max).map(|column| {
            let label = view
                .cell(column, row)
                .map(|c| short_code(&c.placed.record.category))
                .unwrap_or_default();
            Cell::new(label).set_alignment(CellAlignment::Center)
        }));
        table.add_row(cells);
    }
    println!("{}", table);
}

fn short_code(code: &str) -> String {
    code.chars().take(3).collect()
}
