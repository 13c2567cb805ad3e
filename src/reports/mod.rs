mod grid;
mod tables;

pub use self::grid::print_view as print_view_grid;
pub use self::tables::{
    category_breakdown as print_category_breakdown, summary as print_view_summary,
    tooltip as print_tooltip,
};
