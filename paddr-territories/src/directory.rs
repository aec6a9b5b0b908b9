use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use crate::{country::Country, data, subdivision::Subdivision};

/// Lookup contract for ISO 3166 reference data.
///
/// Address validation only needs the two `find_*` lookups; the enumerations
/// are provided for callers that need the full set of recognized codes.
pub trait TerritoryDirectory {
    fn find_country(&self, alpha2: &str) -> Option<&Country>;
    fn find_subdivision(&self, code: &str) -> Option<&Subdivision>;
    /// All country alpha-2 codes, in table order.
    fn country_codes(&self) -> Box<dyn Iterator<Item = &str> + '_>;
    /// All subdivision codes, in table order.
    fn subdivision_codes(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

/// [`TerritoryDirectory`] backed by the embedded ISO 3166 tables.
///
/// Lookups are case-sensitive: code normalization is the caller's concern.
#[derive(Debug)]
pub struct IsoTerritoryDirectory {
    countries: HashMap<&'static str, Country>,
    subdivisions: HashMap<&'static str, Subdivision>,
}

impl IsoTerritoryDirectory {
    fn new() -> Self {
        let countries = data::COUNTRIES
            .iter()
            .map(|&(alpha2, name)| (alpha2, Country { alpha2, name }))
            .collect::<HashMap<_, _>>();
        let subdivisions = data::SUBDIVISIONS
            .iter()
            .map(|&(code, name, category)| {
                (
                    code,
                    Subdivision {
                        code,
                        name,
                        category,
                    },
                )
            })
            .collect::<HashMap<_, _>>();
        debug!(
            "Indexed {} countries and {} subdivisions",
            countries.len(),
            subdivisions.len()
        );
        Self {
            countries,
            subdivisions,
        }
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn subdivision_count(&self) -> usize {
        self.subdivisions.len()
    }
}

impl TerritoryDirectory for IsoTerritoryDirectory {
    fn find_country(&self, alpha2: &str) -> Option<&Country> {
        self.countries.get(alpha2)
    }

    fn find_subdivision(&self, code: &str) -> Option<&Subdivision> {
        self.subdivisions.get(code)
    }

    fn country_codes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(data::COUNTRIES.iter().map(|&(alpha2, _)| alpha2))
    }

    fn subdivision_codes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(data::SUBDIVISIONS.iter().map(|&(code, _, _)| code))
    }
}

lazy_static! {
    static ref DIRECTORY: IsoTerritoryDirectory = IsoTerritoryDirectory::new();
}

/// The process-wide directory, indexed on first use and immutable thereafter.
pub fn directory() -> &'static IsoTerritoryDirectory {
    &DIRECTORY
}

/// All recognized territory identifiers: every country alpha-2 code followed
/// by every subdivision code, without de-duplication or sorting.
pub fn territory_codes() -> impl Iterator<Item = &'static str> {
    data::COUNTRIES
        .iter()
        .map(|&(alpha2, _)| alpha2)
        .chain(data::SUBDIVISIONS.iter().map(|&(code, _, _)| code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_country() {
        let france = directory().find_country("FR").unwrap();
        assert_eq!(france.alpha2, "FR");
        assert_eq!(france.name, "France");
        assert!(directory().find_country("ZZ").is_none());
    }

    #[test]
    fn find_subdivision() {
        let nord = directory().find_subdivision("FR-59").unwrap();
        assert_eq!(nord.name, "Nord");
        assert_eq!(nord.category, "Metropolitan department");
        assert_eq!(nord.country_alpha2(), "FR");
        assert!(directory().find_subdivision("FR-999").is_none());
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert!(directory().find_country("fr").is_none());
        assert!(directory().find_subdivision("fr-59").is_none());
    }

    #[test]
    fn territory_codes_concatenates_countries_and_subdivisions() {
        let codes: Vec<_> = territory_codes().collect();
        assert_eq!(
            codes.len(),
            directory().country_count() + directory().subdivision_count()
        );
        assert!(codes.contains(&"FR"));
        assert!(codes.contains(&"FR-59"));
        assert!(!codes.contains(&"FRE"));
        // Countries first, subdivisions after.
        let first_subdivision = codes
            .iter()
            .position(|code| code.contains('-'))
            .unwrap();
        assert_eq!(first_subdivision, directory().country_count());
    }

    #[test]
    fn enumerations_are_restartable() {
        assert_eq!(
            directory().country_codes().count(),
            directory().country_codes().count()
        );
        assert_eq!(directory().country_codes().count(), 249);
    }
}
