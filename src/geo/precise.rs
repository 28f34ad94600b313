use crate::dataset::{GeoNameId, LocationRecord, LocationTable};
use crate::geo::{GeoAttribute, GeoAttributes, ResolveStrategy};

/// Fill every attribute independently from all references of a prefix.
///
/// Each attribute takes the first present value among the references' location
/// rows, scanned in location-table order, so continent and city may come from
/// different references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Precise;

fn first_known<F>(rows: &[&LocationRecord], field: F) -> GeoAttribute
where
    F: Fn(&LocationRecord) -> Option<&String>,
{
    rows.iter()
        .find_map(|&row| field(row))
        .cloned()
        .into()
}

impl ResolveStrategy for Precise {
    fn resolve(&self, locations: &LocationTable, references: &[GeoNameId]) -> GeoAttributes {
        let rows = locations.rows_in_table_order(references);
        GeoAttributes {
            continent_name: first_known(&rows, |row| row.continent_name.as_ref()),
            country_name: first_known(&rows, |row| row.country_name.as_ref()),
            city_name: first_known(&rows, |row| row.city_name.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_complementary_references() {
        let locations = LocationTable::new([
            LocationRecord::new(100, Some("Europe"), Some("United Kingdom"), None),
            LocationRecord::new(200, None, None, Some("London")),
        ]);
        let attributes = Precise.resolve(&locations, &[GeoNameId(100), GeoNameId(200)]);
        assert_eq!(
            attributes,
            GeoAttributes {
                continent_name: "Europe".into(),
                country_name: "United Kingdom".into(),
                city_name: "London".into(),
            }
        );
    }

    #[test]
    fn scans_in_location_table_order() {
        let locations = LocationTable::new([
            LocationRecord::new(200, Some("Europe"), Some("France"), Some("Paris")),
            LocationRecord::new(100, Some("Europe"), Some("United Kingdom"), Some("London")),
        ]);
        // Reference 100 comes first in the block table, but 200 is first in the location table
        let attributes = Precise.resolve(&locations, &[GeoNameId(100), GeoNameId(200)]);
        assert_eq!(attributes.country_name.as_deref(), Some("France"));
        assert_eq!(attributes.city_name.as_deref(), Some("Paris"));
    }

    #[test]
    fn missing_references_contribute_nothing() {
        let locations = LocationTable::new([LocationRecord::new(
            200,
            None,
            Some("United Kingdom"),
            None,
        )]);
        let attributes = Precise.resolve(&locations, &[GeoNameId(100), GeoNameId(200)]);
        assert_eq!(attributes.continent_name, GeoAttribute::Unknown);
        assert_eq!(attributes.country_name.as_deref(), Some("United Kingdom"));
        assert_eq!(attributes.city_name, GeoAttribute::Unknown);
    }

    #[test]
    fn no_references() {
        let locations = LocationTable::new([LocationRecord::new(
            100,
            Some("Europe"),
            None,
            None,
        )]);
        assert_eq!(Precise.resolve(&locations, &[]), GeoAttributes::unknown());
    }
}
