use crate::prefix::NetworkRecordError;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(r#"Error parsing {table} table: {error}"#)]
    TableCorrupted {
        table: &'static str,
        error: TableError,
    },
    #[error(r#"Error parsing file "{path}": {error}"#)]
    FileCorrupted { path: PathBuf, error: TableError },
    #[error(r#"Error while attempting to read file "{path}": {error}"#)]
    FileIoError {
        path: PathBuf,
        error: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(r#"Network "{record}" is invalid: {error}"#)]
    InvalidRecord {
        record: String,
        error: NetworkRecordError,
    },
}
