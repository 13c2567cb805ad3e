//! Grid layout: bucket records into one column per group key, stack each
//! column in comparator order and attach a normalised score.

use crate::compare::Comparator;
use crate::error::{GridError, GridResult};
use crate::record::{GridPosition, PlacedRecord, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBounds {
    pub min_group_key: u32,
    pub max_group_key: u32,
    /// Size of the largest bucket.
    pub max_row_count: usize,
}

impl LayoutBounds {
    /// Number of columns in `[min_group_key, max_group_key]`.
    #[inline]
    pub fn column_count(&self) -> usize {
        span(self.min_group_key, self.max_group_key)
    }
}

/// Records sharing one group key, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a> {
    pub group_key: u32,
    pub members: Vec<&'a Record>,
}

impl Bucket<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    /// Placed copies of the input, in input order.
    pub placed: Vec<PlacedRecord>,
    pub bounds: LayoutBounds,
}

impl GridLayout {
    /// One column, bottom row first.
    pub fn column(&self, group_key: u32) -> Vec<&PlacedRecord> {
        let mut col: Vec<&PlacedRecord> = self
            .placed
            .iter()
            .filter(|p| p.position.column == group_key)
            .collect();
        col.sort_by_key(|p| p.position.row);
        col
    }

    pub fn cell(&self, column: u32, row: usize) -> Option<&PlacedRecord> {
        let pos = GridPosition { column, row };
        self.placed.iter().find(|p| p.position == pos)
    }

    pub fn find(&self, id: &str) -> Option<&PlacedRecord> {
        self.placed.iter().find(|p| p.record.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

#[inline]
fn span(min: u32, max: u32) -> usize {
    if max < min {
        0
    } else {
        (max - min) as usize + 1
    }
}

pub fn compute_bounds(records: &[Record]) -> GridResult<LayoutBounds> {
    let first = records.first().ok_or(GridError::EmptyInput)?;

    let mut min_group_key = first.group_key;
    let mut max_group_key = first.group_key;
    let mut counts: HashMap<u32, usize> = HashMap::new();

    for r in records {
        min_group_key = min_group_key.min(r.group_key);
        max_group_key = max_group_key.max(r.group_key);
        *counts.entry(r.group_key).or_insert(0) += 1;
    }

    let max_row_count = counts.values().copied().max().unwrap_or(0);

    Ok(LayoutBounds {
        min_group_key,
        max_group_key,
        max_row_count,
    })
}

/// One bucket per key in `[min_group_key, max_group_key]`, ascending. Keys
/// with no records still get an (empty) bucket.
pub fn bucket_by_group_key(
    records: &[Record],
    min_group_key: u32,
    max_group_key: u32,
) -> GridResult<Vec<Bucket<'_>>> {
    let indices = bucket_indices(records, min_group_key, max_group_key)?;
    Ok(indices
        .into_iter()
        .enumerate()
        .map(|(i, members)| Bucket {
            group_key: min_group_key + i as u32,
            members: members.into_iter().map(|idx| &records[idx]).collect(),
        })
        .collect())
}

fn bucket_indices(
    records: &[Record],
    min_group_key: u32,
    max_group_key: u32,
) -> GridResult<Vec<Vec<usize>>> {
    let mut buckets = vec![Vec::new(); span(min_group_key, max_group_key)];

    for (idx, r) in records.iter().enumerate() {
        if r.group_key < min_group_key || r.group_key > max_group_key {
            return Err(GridError::GroupKeyOutOfRange {
                group_key: r.group_key,
                min: min_group_key,
                max: max_group_key,
            });
        }
        buckets[(r.group_key - min_group_key) as usize].push(idx);
    }

    Ok(buckets)
}

/// Largest rank metric in the set, 0.0 when empty.
pub fn max_rank_metric(records: &[Record]) -> f64 {
    records
        .iter()
        .map(|r| r.rank_metric)
        .fold(None, |acc: Option<f64>, m| match acc {
            Some(a) if a >= m => Some(a),
            _ => Some(m),
        })
        .unwrap_or(0.0)
}

/// `None` when the denominator is zero or not finite.
#[inline]
pub fn normalize(metric: f64, max_metric: f64) -> Option<f64> {
    if max_metric == 0.0 || !max_metric.is_finite() {
        None
    } else {
        Some(metric / max_metric)
    }
}

pub fn layout_grid<C>(records: &[Record], comparator: &C, max_metric: f64) -> GridResult<GridLayout>
where
    C: Comparator + ?Sized,
{
    let bounds = compute_bounds(records)?;
    let mut buckets = bucket_indices(records, bounds.min_group_key, bounds.max_group_key)?;

    let mut rows = vec![0usize; records.len()];
    for bucket in buckets.iter_mut() {
        // Vec::sort_by is stable: ties keep input order.
        bucket.sort_by(|&a, &b| comparator.compare(&records[a], &records[b]));
        for (row, &idx) in bucket.iter().enumerate() {
            rows[idx] = row;
        }
    }

    let placed = records
        .iter()
        .zip(rows)
        .map(|(r, row)| PlacedRecord {
            record: r.clone(),
            position: GridPosition {
                column: r.group_key,
                row,
            },
            normalized_score: normalize(r.rank_metric, max_metric),
        })
        .collect();

    debug!(
        "Grid layout: {} records over columns {}..={} ({} rows max)",
        records.len(),
        bounds.min_group_key,
        bounds.max_group_key,
        bounds.max_row_count
    );

    Ok(GridLayout { placed, bounds })
}
