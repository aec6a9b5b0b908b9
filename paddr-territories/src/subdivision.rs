/// An ISO 3166-2 subdivision entry.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivision {
    /// Full ISO 3166-2 code, e.g. `"CA-ON"`.
    pub code     : &'static str,
    /// Subdivision name, e.g. `"Ontario"`.
    pub name     : &'static str,
    /// Subdivision category as classified by ISO 3166-2, e.g. `"Province"`.
    pub category : &'static str,
}

impl Subdivision {
    /// Alpha-2 code of the parent country.
    ///
    /// ISO 3166-2 codes are always prefixed with the parent country's
    /// alpha-2 code, separated by a hyphen.
    pub fn country_alpha2(&self) -> &'static str {
        self.code
            .split_once('-')
            .map(|(alpha2, _)| alpha2)
            .unwrap_or(self.code)
    }

    /// Snake_case identifier of the category,
    /// e.g. `"Metropolitan department"` becomes `"metropolitan_department"`.
    pub fn category_id(&self) -> String {
        category_id(self.category)
    }
}

/// Converts a subdivision category into a lowercase identifier.
///
/// Non-alphanumeric runs collapse into a single underscore, so
/// `"Chain (of islands)"` becomes `"chain_of_islands"`.
pub fn category_id(category: &str) -> String {
    category
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_country_from_code_prefix() {
        let subdivision = Subdivision {
            code: "CA-ON",
            name: "Ontario",
            category: "Province",
        };
        assert_eq!(subdivision.country_alpha2(), "CA");
    }

    #[test]
    fn category_identifiers() {
        assert_eq!(category_id("Province"), "province");
        assert_eq!(
            category_id("Metropolitan department"),
            "metropolitan_department"
        );
        assert_eq!(category_id("Chain (of islands)"), "chain_of_islands");
        assert_eq!(
            category_id("City with county rights"),
            "city_with_county_rights"
        );
    }
}
