use agegrid::category::CategoryTable;
use agegrid::shade::HOVER_FILL;
use agegrid::tooltip::{TooltipContent, TooltipPlacement, TooltipTransitions};
use agegrid::view::{ShadedCell, ViewKind, ViewLayout};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::collections::BTreeMap;

pub fn summary(results: &[(ViewKind, ViewLayout)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("View").add_attribute(Attribute::Bold),
        Cell::new("Title"),
        Cell::new("Records").fg(Color::Cyan),
        Cell::new("Ages"),
        Cell::new("Tallest"),
        Cell::new("Extent"),
    ]);

    for i in 2..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (kind, view) in results {
        let b = &view.bounds;
        let e = &view.extent;
        table.add_row(vec![
            Cell::new(kind).add_attribute(Attribute::Bold),
            Cell::new(&view.title),
            Cell::new(view.cells.len()).fg(Color::Cyan),
            Cell::new(format!("{}-{}", b.min_group_key, b.max_group_key)),
            Cell::new(b.max_row_count),
            Cell::new(format!(
                "{}-{} x {}",
                e.min_group_key, e.max_group_key, e.max_row_count
            )),
        ]);
    }
    println!("\n{}", table);
}

pub fn category_breakdown(view: &ViewLayout, categories: &CategoryTable) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for c in &view.cells {
        *counts.entry(c.placed.record.category.as_str()).or_insert(0) += 1;
    }

    let mut rows: Vec<(&str, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Code").add_attribute(Attribute::Bold),
        Cell::new("Label"),
        Cell::new("Seats"),
        Cell::new("Fill"),
    ]);
    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (code, count) in rows {
        let d = categories.lookup(code);
        let label = if categories.is_known(code) {
            Cell::new(&d.label)
        } else {
            Cell::new(&d.label).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(code).add_attribute(Attribute::Bold),
            label,
            Cell::new(count),
            Cell::new(&d.fill),
        ]);
    }
    println!("\n{}", table);
}

pub fn tooltip(
    cell: &ShadedCell,
    content: &TooltipContent,
    placement: Option<TooltipPlacement>,
    transitions: &TooltipTransitions,
) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for line in content.lines() {
        table.add_row(vec![Cell::new(line)]);
    }
    println!("\n{}", table);

    let p = &cell.placed;
    println!(
        "Cell: column {} row {} | fill {} (hover {}) | score {}",
        p.position.column,
        p.position.row,
        cell.fill,
        HOVER_FILL,
        p.normalized_score
            .map(|s| format!("{:.3}", s))
            .unwrap_or_else(|| "-".to_string())
    );
    if let Some(pl) = placement {
        println!("Placement: left {:.0}px, top {:.0}px", pl.left, pl.top);
    }
    println!(
        "Fade: in {}ms to {:.2}, out {}ms to {:.2}",
        transitions.show.duration_ms,
        transitions.show.opacity,
        transitions.hide.duration_ms,
        transitions.hide.opacity
    );
    println!("{}", content.to_html());
}
