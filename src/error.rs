use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    // --- I/O ---
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // --- Data ---
    #[error("Column `{column}` missing in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid label `{value}` at {path} row {row}")]
    InvalidLabel {
        path: PathBuf,
        row: u64,
        value: String,
    },

    #[error("No rows left after cleaning and filtering")]
    EmptyCorpus,

    // --- Config ---
    #[error("Invalid split ratios: {0}")]
    InvalidRatios(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
