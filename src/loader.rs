use crate::config::ColumnMap;
use crate::error::{GridError, GridResult};
use crate::record::Record;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    /// Rows dropped for a missing or unparseable required field.
    pub skipped: usize,
}

struct ColumnIndex {
    id: usize,
    group: usize,
    category: usize,
    rank: usize,
    secondary: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, columns: &ColumnMap) -> GridResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require =
            |name: &str| find(name).ok_or_else(|| GridError::MissingColumn(name.to_string()));

        let secondary = if columns.secondary_column.trim().is_empty() {
            None
        } else {
            let idx = find(&columns.secondary_column);
            if idx.is_none() {
                warn!(
                    "Column '{}' not found; records will have no turnout.",
                    columns.secondary_column
                );
            }
            idx
        };

        Ok(Self {
            id: require(&columns.id_column)?,
            group: require(&columns.group_column)?,
            category: require(&columns.category_column)?,
            rank: require(&columns.rank_column)?,
            secondary,
        })
    }
}

pub fn load_records<P: AsRef<Path>>(path: P, columns: &ColumnMap) -> GridResult<LoadedRecords> {
    let path = path.as_ref();
    info!("Loading records from: {}", path.display());
    let file = File::open(path)?;
    load_records_from_reader(file, columns)
}

pub fn load_records_from_reader<R: Read>(reader: R, columns: &ColumnMap) -> GridResult<LoadedRecords> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::resolve(&headers, columns)?;

    let mut loaded = LoadedRecords::default();
    for (row_idx, result) in rdr.records().enumerate() {
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", row_idx + 1, e);
                loaded.skipped += 1;
                continue;
            }
        };

        match parse_row(&rec, &index) {
            Some(record) => loaded.records.push(record),
            None => {
                debug!("[Row {}] Skipped: {:?}", row_idx + 1, rec);
                loaded.skipped += 1;
            }
        }
    }

    if loaded.skipped > 0 {
        warn!("Skipped {} invalid rows.", loaded.skipped);
    }
    info!("Loaded {} records.", loaded.records.len());

    Ok(loaded)
}

fn parse_row(rec: &StringRecord, index: &ColumnIndex) -> Option<Record> {
    let id = rec.get(index.id)?;
    if id.is_empty() {
        return None;
    }
    let category = rec.get(index.category)?;
    if category.is_empty() {
        return None;
    }

    let group_key = parse_group_key(rec.get(index.group)?)?;
    let rank_metric = parse_finite(rec.get(index.rank)?)?;

    let secondary_metric = match index.secondary.and_then(|i| rec.get(i)) {
        None | Some("") => None,
        Some(raw) => Some(parse_finite(raw)?),
    };

    Some(Record {
        id: id.to_string(),
        group_key,
        category: category.to_string(),
        rank_metric,
        secondary_metric,
    })
}

/// Accepts `"40"` and integral floats like `"40.0"`.
pub fn parse_group_key(raw: &str) -> Option<u32> {
    if let Ok(v) = raw.parse::<u32>() {
        return Some(v);
    }
    let v = parse_finite(raw)?;
    if v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64 {
        Some(v as u32)
    } else {
        None
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
