use crate::dataset::LocationRecord;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One geographic attribute, either resolved or explicitly unknown.
///
/// Serializes as a nullable string: [GeoAttribute::Unknown] is `null`, which
/// keeps it apart from a known empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum GeoAttribute {
    Known(String),
    #[default]
    Unknown,
}

impl GeoAttribute {
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown => None,
        }
    }
}

impl From<Option<String>> for GeoAttribute {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl From<GeoAttribute> for Option<String> {
    fn from(attribute: GeoAttribute) -> Self {
        match attribute {
            GeoAttribute::Known(value) => Some(value),
            GeoAttribute::Unknown => None,
        }
    }
}

impl From<&str> for GeoAttribute {
    fn from(value: &str) -> Self {
        Self::Known(value.to_owned())
    }
}

impl fmt::Display for GeoAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => f.write_str(value),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Reconciled location of a /24 prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoAttributes {
    pub continent_name: GeoAttribute,
    pub country_name: GeoAttribute,
    pub city_name: GeoAttribute,
}

impl GeoAttributes {
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        !(self.continent_name.is_known() || self.country_name.is_known() || self.city_name.is_known())
    }
}

impl From<&LocationRecord> for GeoAttributes {
    fn from(location: &LocationRecord) -> Self {
        Self {
            continent_name: location.continent_name.clone().into(),
            country_name: location.country_name.clone().into(),
            city_name: location.city_name.clone().into(),
        }
    }
}
