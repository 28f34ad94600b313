use super::{DatasetError, GeoDataset, DEFAULT_BLOCKS_FILE, DEFAULT_LOCATIONS_FILE};

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DatasetConfigError {
    #[error(r#"dataset must set "path" or both "blocks" and "locations", "{0}" is missing"#)]
    MissingTable(&'static str),
}

/// Explicit locations of the two CSV tables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DatasetConfigDe")]
pub struct DatasetConfig {
    pub blocks: PathBuf,
    pub locations: PathBuf,
}

/// `path` is a directory with the default GeoLite2 file names, `blocks` and
/// `locations` override them and are relative to `path` when both are given.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetConfigDe {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    blocks: Option<PathBuf>,
    #[serde(default)]
    locations: Option<PathBuf>,
}

impl TryFrom<DatasetConfigDe> for DatasetConfig {
    type Error = DatasetConfigError;

    fn try_from(value: DatasetConfigDe) -> Result<Self, Self::Error> {
        let DatasetConfigDe {
            path,
            blocks,
            locations,
        } = value;
        let resolve = |file: Option<PathBuf>, default: &str, name| match (&path, file) {
            (Some(dir), Some(file)) => Ok(dir.join(file)),
            (Some(dir), None) => Ok(dir.join(default)),
            (None, Some(file)) => Ok(file),
            (None, None) => Err(DatasetConfigError::MissingTable(name)),
        };
        Ok(Self {
            blocks: resolve(blocks, DEFAULT_BLOCKS_FILE, "blocks")?,
            locations: resolve(locations, DEFAULT_LOCATIONS_FILE, "locations")?,
        })
    }
}

impl DatasetConfig {
    pub fn load(&self) -> Result<GeoDataset, DatasetError> {
        GeoDataset::from_csv_files(&self.blocks, &self.locations)
    }
}
