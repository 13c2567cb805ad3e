use crate::category::CategoryTable;
use crate::record::PlacedRecord;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Fill applied to the rectangle under the pointer.
pub const HOVER_FILL: &str = "#80ffff";

/// Five-step sequential ColorBrewer schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    BuGn5,
    Reds5,
    PuBu5,
}

impl Palette {
    pub fn colors(&self) -> &'static [&'static str] {
        match self {
            Self::BuGn5 => &["#edf8fb", "#b2e2e2", "#66c2a4", "#2ca25f", "#006d2c"],
            Self::Reds5 => &["#fee5d9", "#fcae91", "#fb6a4a", "#de2d26", "#a50f15"],
            Self::PuBu5 => &["#f1eef6", "#bdc9e1", "#74a9cf", "#2b8cbe", "#045a8d"],
        }
    }
}

/// Maps a continuous domain onto `range.len()` equal-width bins.
///
/// A value sitting exactly on a bin edge falls into the upper bin. Values
/// outside the domain clamp to the first or last colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizeScale {
    pub domain: (f64, f64),
    pub range: Vec<String>,
}

impl QuantizeScale {
    pub fn new(domain: (f64, f64), palette: Palette) -> Self {
        Self {
            domain,
            range: palette.colors().iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Inner bin edges, `range.len() - 1` of them.
    pub fn thresholds(&self) -> Vec<f64> {
        let (x0, x1) = self.domain;
        let k = self.range.len();
        (1..k)
            .map(|j| x0 + (x1 - x0) * j as f64 / k as f64)
            .collect()
    }

    pub fn bin(&self, value: f64) -> Option<usize> {
        if self.range.is_empty() || value.is_nan() {
            return None;
        }
        Some(self.thresholds().iter().filter(|&&t| t <= value).count())
    }

    pub fn color(&self, value: f64) -> Option<&str> {
        self.bin(value).map(|i| self.range[i].as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadeField {
    NormalizedScore,
    SecondaryMetric,
}

impl ShadeField {
    pub fn value(&self, placed: &PlacedRecord) -> Option<f64> {
        match self {
            Self::NormalizedScore => placed.normalized_score,
            Self::SecondaryMetric => placed.record.secondary_metric,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shade {
    ByCategory,
    Quantize { field: ShadeField, scale: QuantizeScale },
}

impl Shade {
    pub fn quantize(field: ShadeField, domain: (f64, f64), palette: Palette) -> Self {
        Self::Quantize {
            field,
            scale: QuantizeScale::new(domain, palette),
        }
    }

    /// Records with nothing to shade by take the table's fallback fill.
    pub fn fill(&self, placed: &PlacedRecord, table: &CategoryTable) -> String {
        match self {
            Self::ByCategory => table.lookup(&placed.record.category).fill.clone(),
            Self::Quantize { field, scale } => field
                .value(placed)
                .and_then(|v| scale.color(v))
                .unwrap_or(table.fallback.fill.as_str())
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_thresholds_split_domain_evenly() {
        let scale = QuantizeScale::new((0.0, 1.0), Palette::Reds5);
        let t = scale.thresholds();
        assert_eq!(t.len(), 4);
        for (got, want) in t.iter().zip([0.2, 0.4, 0.6, 0.8]) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_quantize_clamps_outside_domain() {
        let scale = QuantizeScale::new((0.5, 0.8), Palette::BuGn5);
        assert_eq!(scale.color(0.1), Some("#edf8fb"));
        assert_eq!(scale.color(0.95), Some("#006d2c"));
        assert_eq!(scale.color(f64::NAN), None);
    }

    #[test]
    fn test_palette_roundtrips_through_name() {
        use std::str::FromStr;
        assert_eq!(Palette::from_str("pu_bu5").unwrap(), Palette::PuBu5);
        assert_eq!(Palette::Reds5.to_string(), "reds5");
    }
}
