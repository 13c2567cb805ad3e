use crate::error::GridResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Party codes as they appear in the results table.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Party {
    Con,
    Lab,
    #[strum(serialize = "SNP")]
    Snp,
    #[strum(serialize = "LD")]
    Ld,
    #[strum(serialize = "DUP")]
    Dup,
    #[strum(serialize = "SF")]
    Sf,
    #[strum(serialize = "PC")]
    Pc,
    Green,
    Ind,
    Spk,
}

impl Party {
    pub fn descriptor(&self) -> CategoryDescriptor {
        match self {
            Self::Con => CategoryDescriptor::new("Conservative", "#0a559d", "#0a559d"),
            Self::Lab => CategoryDescriptor::new("Labour", "#d20915", "#d20915"),
            // Fill is paler than the label colour so the text stays readable.
            Self::Snp => CategoryDescriptor::new("Scottish National Party", "#fff58c", "#ffd060"),
            Self::Ld => CategoryDescriptor::new("Liberal Democrat", "#f89f31", "#f89f31"),
            Self::Dup => CategoryDescriptor::new("DUP", "#ca3415", "#ca3415"),
            Self::Sf => CategoryDescriptor::new("Sinn Fein", "#0d665f", "#0d665f"),
            Self::Pc => CategoryDescriptor::new("Plaid Cymru", "#68b76b", "#68b76b"),
            Self::Green => CategoryDescriptor::new("Green", "#008000", "#008000"),
            Self::Ind => CategoryDescriptor::new("Independent", FALLBACK_COLOR, FALLBACK_COLOR),
            Self::Spk => CategoryDescriptor::new("Speaker", "#909090", "#909090"),
        }
    }
}

pub const FALLBACK_COLOR: &str = "#c0c0c0";

/// How one category is labelled and coloured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub label: String,
    /// Rectangle fill.
    pub fill: String,
    /// Label colour in the tooltip.
    pub highlight: String,
}

impl CategoryDescriptor {
    pub fn new(label: &str, fill: &str, highlight: &str) -> Self {
        Self {
            label: label.to_string(),
            fill: fill.to_string(),
            highlight: highlight.to_string(),
        }
    }
}

/// Category code -> descriptor, with one fallback for codes not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub entries: BTreeMap<String, CategoryDescriptor>,
    pub fallback: CategoryDescriptor,
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::uk_parties()
    }
}

impl CategoryTable {
    pub fn uk_parties() -> Self {
        let entries = Party::iter()
            .map(|p| (p.to_string(), p.descriptor()))
            .collect();
        Self {
            entries,
            fallback: Self::unknown(),
        }
    }

    pub fn unknown() -> CategoryDescriptor {
        CategoryDescriptor::new("Unknown", FALLBACK_COLOR, FALLBACK_COLOR)
    }

    #[inline]
    pub fn lookup(&self, code: &str) -> &CategoryDescriptor {
        self.entries.get(code).unwrap_or(&self.fallback)
    }

    #[inline]
    pub fn is_known(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
