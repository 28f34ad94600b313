use std::fmt;
use std::net::{AddrParseError, Ipv4Addr};
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// First three octets of an IPv4 address, the only precision we resolve to.
///
/// Displays as a dotted string, e.g. `"82.110.141"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrefixKey([u8; 3]);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NetworkRecordError {
    #[error("Network must be in format SUBNET or SUBNET/SUFFIX")]
    Parts,
    #[error("Subnet of the network has wrong format")]
    Subnet(#[from] AddrParseError),
    #[error("Suffix of the network has wrong format")]
    SuffixFormat(#[from] ParseIntError),
    #[error(r#"Suffix of the network is too large: "{0}""#)]
    SuffixTooLarge(u32),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error(r#"Prefix "{0}" must be three dot-separated octets"#)]
pub struct MalformedPrefixError(pub String);

impl PrefixKey {
    pub fn new(octets: [u8; 3]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; 3] {
        self.0
    }

    /// Truncate a network-block value like "82.110.141.0/24" to its /24 key.
    ///
    /// No subnet arithmetic happens here: a "/16" block keys on its own first
    /// three octets like any other row.
    pub fn from_network(network: &str) -> Result<Self, NetworkRecordError> {
        let subnet = match network.trim().split_once('/') {
            Some((subnet, suffix)) => {
                let suffix: u32 = suffix.parse()?;
                if suffix > u32::BITS {
                    return Err(NetworkRecordError::SuffixTooLarge(suffix));
                }
                subnet
            }
            None => network.trim(),
        };
        if subnet.is_empty() {
            return Err(NetworkRecordError::Parts);
        }
        let subnet: Ipv4Addr = subnet.parse()?;
        Ok(subnet.into())
    }
}

impl From<Ipv4Addr> for PrefixKey {
    fn from(address: Ipv4Addr) -> Self {
        let [a, b, c, _] = address.octets();
        Self([a, b, c])
    }
}

impl FromStr for PrefixKey {
    type Err = MalformedPrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || MalformedPrefixError(s.to_owned());
        // Reuse the address parser so the octet rules match full addresses
        let address: Ipv4Addr = format!("{s}.0").parse().map_err(|_| error())?;
        Ok(address.into())
    }
}

impl fmt::Display for PrefixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}.{b}.{c}")
    }
}
