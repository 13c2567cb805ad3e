use crate::error::{GridError, GridResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which CSV columns feed which record field.
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    #[arg(long, default_value = "constituency")]
    pub id_column: String,
    #[arg(long, default_value = "median_age")]
    pub group_column: String,
    #[arg(long, default_value = "party")]
    pub category_column: String,
    #[arg(long, default_value = "majority")]
    pub rank_column: String,
    #[arg(long, default_value = "turnout")]
    pub secondary_column: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id_column: "constituency".to_string(),
            group_column: "median_age".to_string(),
            category_column: "party".to_string(),
            rank_column: "majority".to_string(),
            secondary_column: "turnout".to_string(),
        }
    }
}

impl ColumnMap {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GridResult<Self> {
        let content = fs::read_to_string(path)?;
        let map: Self = serde_json::from_str(&content)?;
        map.validate()?;
        Ok(map)
    }

    /// Required columns must be named; the secondary column may be left empty
    /// to ignore turnout entirely.
    pub fn validate(&self) -> GridResult<()> {
        let required = [
            ("id_column", &self.id_column),
            ("group_column", &self.group_column),
            ("category_column", &self.category_column),
            ("rank_column", &self.rank_column),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(GridError::Config(format!("{} must not be empty", name)));
            }
        }
        Ok(())
    }

    /// Flags given explicitly on the command line win over file values.
    pub fn merge_from_cli(&mut self, cli_columns: &ColumnMap, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_columns.$field.clone();
                }
            };
        }

        update_if_present!(id_column, "id_column");
        update_if_present!(group_column, "group_column");
        update_if_present!(category_column, "category_column");
        update_if_present!(rank_column, "rank_column");
        update_if_present!(secondary_column, "secondary_column");
    }
}
