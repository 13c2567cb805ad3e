use crate::category::Party;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A total order over two records, used for the stable in-bucket sort.
pub trait Comparator {
    fn compare(&self, a: &Record, b: &Record) -> Ordering;
}

impl<F> Comparator for F
where
    F: Fn(&Record, &Record) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self(a, b)
    }
}

/// Category codes in stacking order. Codes not listed rank after all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryPriority(pub Vec<String>);

impl CategoryPriority {
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Self {
        Self(codes.iter().map(|c| c.as_ref().to_string()).collect())
    }

    pub fn labour_first() -> Self {
        Self::from_parties(&[
            Party::Lab,
            Party::Con,
            Party::Snp,
            Party::Ld,
            Party::Dup,
            Party::Sf,
            Party::Pc,
            Party::Green,
            Party::Ind,
            Party::Spk,
        ])
    }

    pub fn conservative_first() -> Self {
        Self::from_parties(&[
            Party::Con,
            Party::Lab,
            Party::Snp,
            Party::Ld,
            Party::Dup,
            Party::Sf,
            Party::Pc,
            Party::Green,
            Party::Ind,
            Party::Spk,
        ])
    }

    fn from_parties(parties: &[Party]) -> Self {
        Self(parties.iter().map(|p| p.to_string()).collect())
    }

    /// Position of `code` in the list, or the list length for unlisted codes.
    #[inline]
    pub fn rank(&self, code: &str) -> usize {
        self.0
            .iter()
            .position(|c| c == code)
            .unwrap_or(self.0.len())
    }
}

/// The named orders available to views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "priority", rename_all = "snake_case")]
pub enum SortOrder {
    /// Category priority, then majority descending within a category.
    CategoryThenMetric(CategoryPriority),
    CategoryOnly(CategoryPriority),
    MetricDescending,
    /// Turnout descending, records without turnout last.
    SecondaryDescending,
}

impl Comparator for SortOrder {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::CategoryThenMetric(priority) => category_then_metric(priority, a, b),
            Self::CategoryOnly(priority) => by_category(priority, a, b),
            Self::MetricDescending => metric_descending(a, b),
            Self::SecondaryDescending => secondary_descending(a, b),
        }
    }
}

pub fn by_category(priority: &CategoryPriority, a: &Record, b: &Record) -> Ordering {
    priority
        .rank(&a.category)
        .cmp(&priority.rank(&b.category))
}

pub fn category_then_metric(priority: &CategoryPriority, a: &Record, b: &Record) -> Ordering {
    match by_category(priority, a, b) {
        // Unlisted codes share the last rank; group them by code so the
        // order stays total.
        Ordering::Equal => a
            .category
            .cmp(&b.category)
            .then_with(|| metric_descending(a, b)),
        other => other,
    }
}

#[inline]
pub fn metric_descending(a: &Record, b: &Record) -> Ordering {
    b.rank_metric.total_cmp(&a.rank_metric)
}

pub fn secondary_descending(a: &Record, b: &Record) -> Ordering {
    match (a.secondary_metric, b.secondary_metric) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
