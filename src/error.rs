use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CashflowError {
    #[error("failed to open database {}: {source}", .path.display())]
    OpenDb {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("failed to create tables: {0}")]
    Schema(rusqlite::Error),

    #[error("failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no CSV files found in {}", .0.display())]
    NoCsvFiles(PathBuf),

    #[error("failed to open CSV file {}: {source}", .path.display())]
    OpenCsv {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read CSV file: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read CSV file: {fault} on line {line}")]
    Quote { line: usize, fault: QuoteFault },

    #[error("failed to truncate transactions table: {0}")]
    Truncate(rusqlite::Error),

    #[error("failed to query transactions: {0}")]
    Query(rusqlite::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Quoting mistakes the CSV reader itself lets through.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFault {
    #[error("bare \" in non-quoted field")]
    Bare,

    #[error("extraneous or missing \" in quoted field")]
    Unbalanced,
}

pub type Result<T> = std::result::Result<T, CashflowError>;
