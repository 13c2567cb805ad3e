//! Info box shown while hovering a rectangle.
//!
//! Content is built from the placed record alone: every record carries its
//! label, category and both metrics, so no further lookups into the source
//! table are needed. Placement takes the pointer position as an argument.

use crate::category::CategoryTable;
use crate::record::PlacedRecord;
use crate::view::DisplayOptions;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Duration;

/// Fade applied to the info box; the renderer owns the animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub duration_ms: u64,
    pub opacity: f64,
}

impl Transition {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

pub const SHOW_TRANSITION: Transition = Transition {
    duration_ms: 150,
    opacity: 0.95,
};

pub const HIDE_TRANSITION: Transition = Transition {
    duration_ms: 300,
    opacity: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipTransitions {
    pub show: Transition,
    pub hide: Transition,
}

impl Default for TooltipTransitions {
    fn default() -> Self {
        Self {
            show: SHOW_TRANSITION,
            hide: HIDE_TRANSITION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipContent {
    pub title: String,
    pub category_label: String,
    pub highlight: String,
    pub majority: Option<String>,
    pub turnout: Option<String>,
}

impl TooltipContent {
    pub fn for_record(placed: &PlacedRecord, table: &CategoryTable, display: &DisplayOptions) -> Self {
        let record = &placed.record;
        let descriptor = table.lookup(&record.category);

        let majority = display
            .show_majority
            .then(|| format!("Majority: {}", format_thousands(record.rank_metric)));

        let turnout = if display.show_turnout {
            record
                .secondary_metric
                .map(|t| format!("Turnout: {}", format_percent(t)))
        } else {
            None
        };

        Self {
            title: record.id.clone(),
            category_label: descriptor.label.clone(),
            highlight: descriptor.highlight.clone(),
            majority,
            turnout,
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        let mut out = vec![self.title.as_str(), self.category_label.as_str()];
        out.extend(self.majority.as_deref());
        out.extend(self.turnout.as_deref());
        out
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<p class=\"constituency\">{}</p><p class=\"party\" style=\"color: {};\">{}</p>",
            escape_html(&self.title),
            escape_html(&self.highlight),
            escape_html(&self.category_label)
        );
        for line in [&self.majority, &self.turnout].into_iter().flatten() {
            let _ = write!(html, "<p>{}</p>", escape_html(line));
        }
        html
    }
}

/// Rounded to a whole number with comma thousands separators:
/// `16761.0` -> `"16,761"`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Fraction to a one-decimal percentage: `0.6821` -> `"68.2%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerPosition {
    pub page_x: f64,
    pub page_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

/// The box sits with its bottom-left corner on the pointer.
pub fn place_tooltip(pointer: PointerPosition, box_height: f64) -> TooltipPlacement {
    TooltipPlacement {
        left: pointer.page_x,
        top: pointer.page_y - box_height,
    }
}
