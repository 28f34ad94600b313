//! Offline IPv4 geolocation at /24 precision over GeoLite2 City CSV tables.
//!
//! Addresses are truncated to their first three octets, every distinct prefix is
//! mapped to its network blocks' geoname_id references, and those references are
//! reconciled into one [GeoAttributes] record by a [Strategy].

pub mod config;
pub mod dataset;
pub mod geo;
mod lookup;
pub mod prefix;

pub use dataset::{GeoDataset, GeoNameId, LocationRecord, NetworkBlockRecord};
pub use geo::{GeoAttribute, GeoAttributes, GeoError, Strategy};
pub use lookup::{expand, prefix_of, AddressMap, IpList, PrefixMap};
pub use prefix::PrefixKey;
