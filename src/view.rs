use crate::category::{CategoryTable, Party};
use crate::compare::{CategoryPriority, SortOrder};
use crate::error::GridResult;
use crate::layout::{layout_grid, max_rank_metric, GridLayout, LayoutBounds};
use crate::record::{PlacedRecord, Record};
use crate::shade::{Palette, Shade, ShadeField};
use crate::tooltip::TooltipTransitions;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Pre-layout restriction of the record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum RecordFilter {
    All,
    CategoryIs(String),
}

impl RecordFilter {
    #[inline]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::CategoryIs(code) => record.category == *code,
        }
    }

    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Renderer-facing knobs that do not affect the layout itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    pub width: u32,
    pub height: u32,
    pub show_majority: bool,
    pub show_turnout: bool,
    /// Fixed x extent shared by views that should line up.
    pub group_key_extent: Option<(u32, u32)>,
    /// Fixed y extent.
    pub row_extent: Option<usize>,
    /// Clicking a rectangle restores its fill and hides the tooltip.
    pub reset_on_click: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub title: String,
    pub subtitle: String,
    pub filter: RecordFilter,
    pub order: SortOrder,
    pub shade: Shade,
    pub display: DisplayOptions,
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Party,
    Turnout,
    Labour,
    Conservative,
}

impl ViewKind {
    pub fn config(&self) -> ViewConfig {
        match self {
            Self::Party => ViewConfig {
                title: "Constituencies by party".to_string(),
                subtitle: "650 seats".to_string(),
                filter: RecordFilter::All,
                order: SortOrder::CategoryThenMetric(CategoryPriority::labour_first()),
                shade: Shade::ByCategory,
                display: full_chart(true, true),
            },
            Self::Turnout => ViewConfig {
                title: "Constituencies by turnout".to_string(),
                subtitle: "Darker is higher".to_string(),
                filter: RecordFilter::All,
                order: SortOrder::SecondaryDescending,
                shade: Shade::quantize(ShadeField::SecondaryMetric, (0.5, 0.8), Palette::BuGn5),
                display: full_chart(false, true),
            },
            Self::Labour => party_majority_view(
                Party::Lab,
                "Labour seats by majority",
                Palette::Reds5,
            ),
            Self::Conservative => party_majority_view(
                Party::Con,
                "Conservative seats by majority",
                Palette::PuBu5,
            ),
        }
    }
}

fn full_chart(show_majority: bool, show_turnout: bool) -> DisplayOptions {
    DisplayOptions {
        width: 400,
        height: 646,
        show_majority,
        show_turnout,
        group_key_extent: None,
        row_extent: Some(49),
        reset_on_click: true,
    }
}

fn party_majority_view(party: Party, title: &str, palette: Palette) -> ViewConfig {
    ViewConfig {
        title: title.to_string(),
        subtitle: "Darker is higher".to_string(),
        filter: RecordFilter::CategoryIs(party.to_string()),
        order: SortOrder::CategoryThenMetric(CategoryPriority::labour_first()),
        shade: Shade::quantize(ShadeField::NormalizedScore, (0.0, 1.0), palette),
        display: DisplayOptions {
            width: 400,
            height: 445,
            show_majority: true,
            show_turnout: false,
            group_key_extent: Some((26, 54)),
            row_extent: Some(31),
            reset_on_click: true,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadedCell {
    #[serde(flatten)]
    pub placed: PlacedRecord,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewLayout {
    pub title: String,
    pub subtitle: String,
    pub display: DisplayOptions,
    /// Bounds computed from the (filtered) data.
    pub bounds: LayoutBounds,
    /// Bounds the renderer should use: display overrides on top of `bounds`.
    pub extent: LayoutBounds,
    /// Info box fade timings.
    pub tooltip: TooltipTransitions,
    pub cells: Vec<ShadedCell>,
}

impl ViewLayout {
    pub fn find(&self, id: &str) -> Option<&ShadedCell> {
        self.cells.iter().find(|c| c.placed.record.id == id)
    }

    pub fn cell(&self, column: u32, row: usize) -> Option<&ShadedCell> {
        self.cells
            .iter()
            .find(|c| c.placed.column() == column && c.placed.row() == row)
    }
}

/// Filter, lay out and shade one view. Bounds and the normalisation
/// denominator come from the filtered set.
pub fn build_view(
    records: &[Record],
    config: &ViewConfig,
    table: &CategoryTable,
) -> GridResult<ViewLayout> {
    let subset = config.filter.apply(records);
    debug!(
        "View '{}': {} of {} records pass the filter",
        config.title,
        subset.len(),
        records.len()
    );

    let max_metric = max_rank_metric(&subset);
    let GridLayout { placed, bounds } = layout_grid(&subset, &config.order, max_metric)?;

    let extent = display_extent(&bounds, &config.display, &config.title);

    let cells = placed
        .into_iter()
        .map(|p| {
            let fill = config.shade.fill(&p, table);
            ShadedCell { placed: p, fill }
        })
        .collect();

    Ok(ViewLayout {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        display: config.display.clone(),
        bounds,
        extent,
        tooltip: TooltipTransitions::default(),
        cells,
    })
}

fn display_extent(bounds: &LayoutBounds, display: &DisplayOptions, title: &str) -> LayoutBounds {
    let (min_group_key, max_group_key) = display
        .group_key_extent
        .unwrap_or((bounds.min_group_key, bounds.max_group_key));
    let max_row_count = display.row_extent.unwrap_or(bounds.max_row_count);

    if min_group_key > bounds.min_group_key || max_group_key < bounds.max_group_key {
        warn!(
            "View '{}': fixed extent {}..={} clips data spanning {}..={}",
            title, min_group_key, max_group_key, bounds.min_group_key, bounds.max_group_key
        );
    }
    if max_row_count < bounds.max_row_count {
        warn!(
            "View '{}': fixed row extent {} is below the tallest column ({})",
            title, max_row_count, bounds.max_row_count
        );
    }

    LayoutBounds {
        min_group_key,
        max_group_key,
        max_row_count,
    }
}
