use crate::dataset::GeoDataset;
use crate::geo::{GeoAttributes, GeoError, ResolveStrategy, Strategy};
use crate::prefix::PrefixKey;

use smallvec::SmallVec;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Records per distinct prefix, the intermediate result of a lookup.
pub type PrefixMap = HashMap<PrefixKey, Arc<GeoAttributes>>;

/// Records keyed by the caller's original address strings. Addresses sharing a
/// prefix share one [Arc].
pub type AddressMap = HashMap<String, Arc<GeoAttributes>>;

/// One or many IPv4 address strings, in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpList<'a>(SmallVec<[&'a str; 1]>);

impl<'a> IpList<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fails on the first malformed address, nothing is resolved in that case.
    pub fn prefixes(&self) -> Result<Vec<(&'a str, PrefixKey)>, GeoError> {
        self.iter()
            .map(|ip| Ok((ip, prefix_of(ip)?)))
            .collect()
    }
}

impl<'a> From<&'a str> for IpList<'a> {
    fn from(ip: &'a str) -> Self {
        Self(smallvec::smallvec![ip])
    }
}

impl<'a> From<&'a String> for IpList<'a> {
    fn from(ip: &'a String) -> Self {
        ip.as_str().into()
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for IpList<'a> {
    fn from(ips: &'a [S]) -> Self {
        Self(ips.iter().map(<S as AsRef<str>>::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for IpList<'a> {
    fn from(ips: &'a [S; N]) -> Self {
        ips.as_slice().into()
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for IpList<'a> {
    fn from(ips: &'a Vec<S>) -> Self {
        ips.as_slice().into()
    }
}

impl<'a> FromIterator<&'a str> for IpList<'a> {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// /24 key of a dotted-quad IPv4 address.
pub fn prefix_of(ip: &str) -> Result<PrefixKey, GeoError> {
    let address: Ipv4Addr = ip.parse().map_err(|error| GeoError::MalformedAddress {
        address: ip.to_owned(),
        error,
    })?;
    Ok(address.into())
}

/// Map every address to the record of its prefix in `resolved`.
pub fn expand<'a>(ips: impl Into<IpList<'a>>, resolved: &PrefixMap) -> Result<AddressMap, GeoError> {
    ips.into()
        .prefixes()?
        .into_iter()
        .map(|(ip, prefix)| {
            let attributes = resolved
                .get(&prefix)
                .ok_or(GeoError::MissingPrefix(prefix))?;
            Ok((ip.to_owned(), Arc::clone(attributes)))
        })
        .collect()
}

impl GeoDataset {
    pub fn resolve_prefix(&self, prefix: PrefixKey, strategy: Strategy) -> GeoAttributes {
        strategy.resolve(self.locations(), self.references(prefix))
    }

    /// Resolve each distinct prefix once.
    pub fn resolve_prefixes<I>(&self, prefixes: I, strategy: Strategy) -> PrefixMap
    where
        I: IntoIterator<Item = PrefixKey>,
    {
        let mut resolved = PrefixMap::new();
        for prefix in prefixes {
            resolved
                .entry(prefix)
                .or_insert_with(|| Arc::new(self.resolve_prefix(prefix, strategy)));
        }
        resolved
    }

    pub fn lookup_with<'a>(
        &self,
        ips: impl Into<IpList<'a>>,
        strategy: Strategy,
    ) -> Result<AddressMap, GeoError> {
        let ips = ips.into();
        let prefixes = ips.prefixes()?;
        let resolved = self.resolve_prefixes(prefixes.iter().map(|&(_, prefix)| prefix), strategy);
        log::debug!(
            "Resolved {} addresses through {} prefixes with {strategy} strategy",
            ips.len(),
            resolved.len(),
        );
        Ok(prefixes
            .into_iter()
            .map(|(ip, prefix)| (ip.to_owned(), Arc::clone(&resolved[&prefix])))
            .collect())
    }

    /// Look addresses up with the efficient strategy.
    pub fn lookup<'a>(&self, ips: impl Into<IpList<'a>>) -> Result<AddressMap, GeoError> {
        self.lookup_with(ips, Strategy::default())
    }
}
