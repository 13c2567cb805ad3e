use serde::{Deserialize, Serialize};

/// One constituency result as read from the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    /// Median age. Doubles as the grid column.
    pub group_key: u32,
    pub category: String,
    /// Majority.
    pub rank_metric: f64,
    /// Turnout as a fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_metric: Option<f64>,
}

impl Record {
    pub fn new(id: &str, group_key: u32, category: &str, rank_metric: f64) -> Self {
        Self {
            id: id.to_string(),
            group_key,
            category: category.to_string(),
            rank_metric,
            secondary_metric: None,
        }
    }

    pub fn with_secondary(mut self, value: f64) -> Self {
        self.secondary_metric = Some(value);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub column: u32,
    pub row: usize,
}

/// A copy of an input record annotated with its place in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub position: GridPosition,
    pub normalized_score: Option<f64>,
}

impl PlacedRecord {
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.position.row
    }
}
