use super::*;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_BLOCKS_FILE: &str = "GeoLite2-City-Blocks-IPv4.csv";
pub const DEFAULT_LOCATIONS_FILE: &str = "GeoLite2-City-Locations-en.csv";

fn read_blocks<R: Read>(reader: R) -> Result<PrefixIndex, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut prefixes = PrefixIndex::new();
    for result in csv_reader.deserialize() {
        let record: NetworkBlockRecord = result?;
        prefixes
            .insert_record(&record)
            .map_err(|error| TableError::InvalidRecord {
                record: record.network.clone(),
                error,
            })?;
    }
    Ok(prefixes)
}

fn read_locations<R: Read>(reader: R) -> Result<LocationTable, TableError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut locations = LocationTable::default();
    for result in csv_reader.deserialize() {
        locations.push(result?);
    }
    Ok(locations)
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|error| DatasetError::FileIoError {
        path: path.to_owned(),
        error,
    })
}

impl GeoDataset {
    /// Load GeoLite2 City CSV tables. Columns other than the ones we need are ignored.
    pub fn from_csv_readers<B, L>(blocks: B, locations: L) -> Result<Self, DatasetError>
    where
        B: Read,
        L: Read,
    {
        let prefixes = read_blocks(blocks).map_err(|error| DatasetError::TableCorrupted {
            table: "blocks",
            error,
        })?;
        let locations = read_locations(locations).map_err(|error| {
            DatasetError::TableCorrupted {
                table: "locations",
                error,
            }
        })?;
        Ok(Self::from_parts(prefixes, locations))
    }

    pub fn from_csv_files<P, Q>(blocks_path: P, locations_path: Q) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (blocks_path, locations_path) = (blocks_path.as_ref(), locations_path.as_ref());
        let error_mapper = |path: &Path| {
            let path = path.to_owned();
            move |error| DatasetError::FileCorrupted { path, error }
        };
        let prefixes = read_blocks(open(blocks_path)?).map_err(error_mapper(blocks_path))?;
        let locations =
            read_locations(open(locations_path)?).map_err(error_mapper(locations_path))?;
        log::info!(
            r#"Loaded {} prefixes from "{}" and {} locations from "{}""#,
            prefixes.len(),
            blocks_path.display(),
            locations.len(),
            locations_path.display(),
        );
        Ok(Self::from_parts(prefixes, locations))
    }

    /// Load the default GeoLite2 file names from `dir_path`.
    pub fn from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Self, DatasetError> {
        let dir_path = dir_path.as_ref();
        Self::from_csv_files(
            dir_path.join(DEFAULT_BLOCKS_FILE),
            dir_path.join(DEFAULT_LOCATIONS_FILE),
        )
    }
}
