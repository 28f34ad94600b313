pub use attributes::{GeoAttribute, GeoAttributes};
pub use efficient::Efficient;
pub use error::GeoError;
pub use precise::Precise;

mod attributes;
mod efficient;
mod error;
mod precise;

use crate::dataset::{GeoNameId, LocationTable};

use enum_dispatch::enum_dispatch;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Reconciliation policy turning a prefix's references into one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
#[enum_dispatch]
pub enum Strategy {
    Efficient(Efficient),
    Precise(Precise),
}

#[enum_dispatch(Strategy)]
pub trait ResolveStrategy {
    /// `references` are in block-table order without duplicates. An empty slice
    /// means the prefix matched no block and must give an all-unknown record.
    fn resolve(&self, locations: &LocationTable, references: &[GeoNameId]) -> GeoAttributes;
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Efficient(_) => "efficient",
            Self::Precise(_) => "precise",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::Efficient(Efficient)
    }
}

impl FromStr for Strategy {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "efficient" => Ok(Efficient.into()),
            "precise" => Ok(Precise.into()),
            _ => Err(GeoError::InvalidStrategy(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = GeoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
