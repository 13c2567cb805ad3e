use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Empty Input: at least one record is required to compute a layout")]
    EmptyInput,

    #[error("Group key {group_key} is outside the layout range [{min}, {max}]")]
    GroupKeyOutOfRange { group_key: u32, min: u32, max: u32 },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing Column: '{0}' is not in the CSV header")]
    MissingColumn(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type GridResult<T> = Result<T, GridError>;
