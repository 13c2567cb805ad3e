use crate::reports;
use agegrid::category::CategoryTable;
use agegrid::error::{GridError, GridResult};
use agegrid::record::Record;
use agegrid::tooltip::{place_tooltip, PointerPosition, TooltipContent};
use agegrid::view::{build_view, ViewKind};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[arg(short, long, default_value = "party")]
    pub view: ViewKind,

    /// Show the tooltip for this record instead of the grid.
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, requires = "pointer_y")]
    pub pointer_x: Option<f64>,

    #[arg(long, requires = "pointer_x")]
    pub pointer_y: Option<f64>,

    #[arg(long, default_value_t = 0.0)]
    pub box_height: f64,
}

pub fn run(args: InspectArgs, records: &[Record], table: &CategoryTable) -> GridResult<()> {
    let config = args.view.config();
    let layout = build_view(records, &config, table)?;

    let Some(id) = &args.id else {
        reports::print_view_grid(&args.view.to_string(), &layout);
        reports::print_category_breakdown(&layout, table);
        return Ok(());
    };

    let cell = layout.find(id).ok_or_else(|| {
        GridError::Config(format!("'{}' is not part of the '{}' view", id, args.view))
    })?;

    let content = TooltipContent::for_record(&cell.placed, table, &config.display);
    let placement = match (args.pointer_x, args.pointer_y) {
        (Some(page_x), Some(page_y)) => Some(place_tooltip(
            PointerPosition { page_x, page_y },
            args.box_height,
        )),
        _ => None,
    };

    reports::print_tooltip(cell, &content, placement, &layout.tooltip);
    Ok(())
}
