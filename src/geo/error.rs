use crate::prefix::{MalformedPrefixError, PrefixKey};

use std::net::AddrParseError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeoError {
    #[error(r#"Unknown strategy "{0}", should be "efficient" or "precise""#)]
    InvalidStrategy(String),
    #[error(r#"Address "{address}" is not a valid IPv4 address: {error}"#)]
    MalformedAddress {
        address: String,
        error: AddrParseError,
    },
    #[error(transparent)]
    MalformedPrefix(#[from] MalformedPrefixError),
    #[error("Prefix {0} is absent from the resolved mapping")]
    MissingPrefix(PrefixKey),
}
