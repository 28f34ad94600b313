pub use config::{DatasetConfig, DatasetConfigError};
pub use error::{DatasetError, TableError};
pub use loader::{DEFAULT_BLOCKS_FILE, DEFAULT_LOCATIONS_FILE};

pub mod config;
mod error;
mod loader;

use crate::prefix::{NetworkRecordError, PrefixKey};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

/// Reference from a network block to a location row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoNameId(pub u32);

impl From<u32> for GeoNameId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for GeoNameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Row of the network-block table, e.g. GeoLite2-City-Blocks-IPv4.csv
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NetworkBlockRecord {
    pub network: String,
    #[serde(default)]
    pub geoname_id: Option<GeoNameId>,
}

impl NetworkBlockRecord {
    pub fn new(network: &str, geoname_id: Option<u32>) -> Self {
        Self {
            network: network.to_owned(),
            geoname_id: geoname_id.map(GeoNameId),
        }
    }
}

/// Row of the location table, e.g. GeoLite2-City-Locations-en.csv
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationRecord {
    pub geoname_id: GeoNameId,
    #[serde(default)]
    pub continent_name: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
}

impl LocationRecord {
    pub fn new(
        geoname_id: u32,
        continent_name: Option<&str>,
        country_name: Option<&str>,
        city_name: Option<&str>,
    ) -> Self {
        Self {
            geoname_id: GeoNameId(geoname_id),
            continent_name: continent_name.map(str::to_owned),
            country_name: country_name.map(str::to_owned),
            city_name: city_name.map(str::to_owned),
        }
    }
}

/// Most /24 prefixes map to a single location
pub type References = SmallVec<[GeoNameId; 2]>;

/// Network blocks grouped by their /24 prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex(HashMap<PrefixKey, References>);

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block rows without a geoname_id carry no reference and are skipped.
    pub fn insert_record(&mut self, record: &NetworkBlockRecord) -> Result<(), NetworkRecordError> {
        let prefix = PrefixKey::from_network(&record.network)?;
        match record.geoname_id {
            Some(geoname_id) => self.insert(prefix, geoname_id),
            None => log::debug!(r#"Network "{}" has no geoname_id, skipping"#, record.network),
        }
        Ok(())
    }

    pub fn insert(&mut self, prefix: PrefixKey, geoname_id: GeoNameId) {
        let references = self.0.entry(prefix).or_default();
        if !references.contains(&geoname_id) {
            references.push(geoname_id);
        }
    }

    /// References in first-seen order, empty if no block matches.
    pub fn get(&self, prefix: PrefixKey) -> &[GeoNameId] {
        self.0
            .get(&prefix)
            .map(|references| references.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Location rows keyed by geoname_id, keeping their original table order.
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    rows: Vec<LocationRecord>,
    positions: HashMap<GeoNameId, usize>,
}

impl LocationTable {
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        let mut table = Self::default();
        for record in records {
            table.push(record);
        }
        table
    }

    /// The first row for a geoname_id wins, later duplicates are dropped.
    pub fn push(&mut self, record: LocationRecord) {
        if self.positions.contains_key(&record.geoname_id) {
            log::warn!(
                "Location {} is listed more than once, keeping the first row",
                record.geoname_id
            );
            return;
        }
        self.positions.insert(record.geoname_id, self.rows.len());
        self.rows.push(record);
    }

    pub fn get(&self, geoname_id: GeoNameId) -> Option<&LocationRecord> {
        self.positions
            .get(&geoname_id)
            .map(|&position| &self.rows[position])
    }

    /// Rows of the given references sorted by table position, unknown references skipped.
    pub fn rows_in_table_order(&self, references: &[GeoNameId]) -> Vec<&LocationRecord> {
        let mut positions: SmallVec<[usize; 4]> = references
            .iter()
            .filter_map(|geoname_id| self.positions.get(geoname_id).copied())
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
            .into_iter()
            .map(|position| &self.rows[position])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// In-memory snapshot of both tables, indexed once at load time.
#[derive(Debug, Clone, Default)]
pub struct GeoDataset {
    prefixes: PrefixIndex,
    locations: LocationTable,
}

impl GeoDataset {
    pub fn new<B, L>(blocks: B, locations: L) -> Result<Self, DatasetError>
    where
        B: IntoIterator<Item = NetworkBlockRecord>,
        L: IntoIterator<Item = LocationRecord>,
    {
        let mut prefixes = PrefixIndex::new();
        for record in blocks {
            prefixes
                .insert_record(&record)
                .map_err(|error| DatasetError::TableCorrupted {
                    table: "blocks",
                    error: TableError::InvalidRecord {
                        record: record.network.clone(),
                        error,
                    },
                })?;
        }
        Ok(Self::from_parts(prefixes, LocationTable::new(locations)))
    }

    pub fn from_parts(prefixes: PrefixIndex, locations: LocationTable) -> Self {
        log::debug!(
            "Indexed {} prefixes and {} locations",
            prefixes.len(),
            locations.len()
        );
        Self {
            prefixes,
            locations,
        }
    }

    /// Prefix resolution: references of all blocks truncating to `prefix`.
    pub fn references(&self, prefix: PrefixKey) -> &[GeoNameId] {
        self.prefixes.get(prefix)
    }

    pub fn prefixes(&self) -> &PrefixIndex {
        &self.prefixes
    }

    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }
}
