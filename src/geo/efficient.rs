use crate::dataset::{GeoNameId, LocationTable};
use crate::geo::{GeoAttributes, ResolveStrategy};

/// Trust the first reference of a prefix and never look further.
///
/// "First" is block-table row order, so the result is only as stable as the
/// order of the table it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Efficient;

impl ResolveStrategy for Efficient {
    fn resolve(&self, locations: &LocationTable, references: &[GeoNameId]) -> GeoAttributes {
        references
            .first()
            .and_then(|&geoname_id| locations.get(geoname_id))
            .map(GeoAttributes::from)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LocationRecord;
    use crate::geo::GeoAttribute;

    fn locations() -> LocationTable {
        LocationTable::new([
            LocationRecord::new(100, Some("Europe"), Some("United Kingdom"), None),
            LocationRecord::new(200, Some("Europe"), Some("United Kingdom"), Some("London")),
        ])
    }

    #[test]
    fn takes_first_reference_only() {
        let attributes = Efficient.resolve(&locations(), &[GeoNameId(100), GeoNameId(200)]);
        assert_eq!(attributes.continent_name.as_deref(), Some("Europe"));
        assert_eq!(attributes.country_name.as_deref(), Some("United Kingdom"));
        assert_eq!(attributes.city_name, GeoAttribute::Unknown);
    }

    #[test]
    fn order_of_references_matters() {
        let attributes = Efficient.resolve(&locations(), &[GeoNameId(200), GeoNameId(100)]);
        assert_eq!(attributes.city_name.as_deref(), Some("London"));
    }

    #[test]
    fn no_references() {
        assert_eq!(Efficient.resolve(&locations(), &[]), GeoAttributes::unknown());
    }

    #[test]
    fn first_reference_missing_from_locations() {
        let attributes = Efficient.resolve(&locations(), &[GeoNameId(300), GeoNameId(200)]);
        assert_eq!(attributes, GeoAttributes::unknown());
    }
}
