use std::{fmt, mem};

use itertools::Itertools as _;
use strum::IntoEnumIterator;

use paddr_territories::{directory, Country, Subdivision, TerritoryDirectory};

use crate::{
    field::{Field, UnknownFieldError},
    validate::{AddressInvalidation, AutoCorrect, Validate},
};

/// A postal address in its normalized (coded) shape.
///
/// All components are optional until [`AddressRecord::normalize_and_validate`]
/// has run; afterwards the invariants below hold:
///
/// - `line1`, `postal_code`, `city` and `country_code` are non-empty,
/// - both codes are trimmed, upper-cased and known to the territory
///   directory,
/// - `subdivision_code` belongs to `country_code`.
///
/// The legacy free-text state label is not stored; it is derived from the
/// subdivision for display (see [`AddressRecord::state`]).
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AddressRecord {
    pub line1            : Option<String>,
    pub line2            : Option<String>,
    pub postal_code      : Option<String>,
    pub city             : Option<String>,
    pub country_code     : Option<String>,
    pub subdivision_code : Option<String>,
}

impl AddressRecord {
    /// Fields that must be present after normalization.
    pub const REQUIRED_FIELDS: [Field; 4] = [
        Field::Line1,
        Field::PostalCode,
        Field::City,
        Field::CountryCode,
    ];

    /// Builds a record from `(field name, value)` pairs and validates it.
    ///
    /// Unrecognized field names are rejected before validation, all of them
    /// listed in the error. Omitted fields stay absent.
    pub fn try_new<I, K, V>(components: I) -> Result<Self, AddressInvalidation>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::default();
        let mut unknown = Vec::new();
        for (name, value) in components {
            match name.as_ref().parse::<Field>() {
                Ok(field) => record.set(field, Some(value.into())),
                Err(UnknownFieldError(name)) => unknown.push(name),
            }
        }
        if !unknown.is_empty() {
            return Err(AddressInvalidation::UnknownField(
                unknown.into_iter().join(", "),
            ));
        }
        record.normalize_and_validate()?;
        Ok(record)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Line1 => self.line1.as_deref(),
            Field::Line2 => self.line2.as_deref(),
            Field::PostalCode => self.postal_code.as_deref(),
            Field::City => self.city.as_deref(),
            Field::CountryCode => self.country_code.as_deref(),
            Field::SubdivisionCode => self.subdivision_code.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::Line1 => &mut self.line1,
            Field::Line2 => &mut self.line2,
            Field::PostalCode => &mut self.postal_code,
            Field::City => &mut self.city,
            Field::CountryCode => &mut self.country_code,
            Field::SubdivisionCode => &mut self.subdivision_code,
        };
        *slot = value;
    }

    /// String-keyed [`AddressRecord::get`] for generic (de)serialization code.
    pub fn get_named(&self, name: &str) -> Result<Option<&str>, UnknownFieldError> {
        Ok(self.get(name.parse()?))
    }

    /// String-keyed [`AddressRecord::set`].
    pub fn set_named(
        &mut self,
        name: &str,
        value: Option<String>,
    ) -> Result<(), UnknownFieldError> {
        self.set(name.parse()?, value);
        Ok(())
    }

    /// Component `(field, value)` pairs in canonical order.
    pub fn items(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::iter().map(move |field| (field, self.get(field)))
    }

    /// True iff none of line1/line2/postal_code/city/country_code is set.
    /// The subdivision is not considered.
    pub fn is_empty(&self) -> bool {
        self.line1.is_none()
            && self.line2.is_none()
            && self.postal_code.is_none()
            && self.city.is_none()
            && self.country_code.is_none()
    }

    /// Normalizes the record in place, then validates it against the
    /// process-wide territory directory.
    ///
    /// Idempotent on valid records. On failure the record keeps any
    /// normalization already applied (casing, blank coercion, line swap,
    /// derived country); validation itself never partially succeeds.
    pub fn normalize_and_validate(&mut self) -> Result<(), AddressInvalidation> {
        self.normalize_and_validate_with(directory())
    }

    /// [`AddressRecord::normalize_and_validate`] with injected lookups.
    pub fn normalize_and_validate_with<D>(
        &mut self,
        directory: &D,
    ) -> Result<(), AddressInvalidation>
    where
        D: TerritoryDirectory + ?Sized,
    {
        *self = mem::take(self).auto_correct();
        // A subdivision without an explicit country determines the country.
        if self.country_code.is_none() {
            if let Some(code) = self.subdivision_code.as_deref() {
                let subdivision = directory
                    .find_subdivision(code)
                    .ok_or_else(|| AddressInvalidation::InvalidSubdivision(code.to_owned()))?;
                self.country_code = Some(subdivision.country_alpha2().to_owned());
            }
        }
        self.validate_with(directory)
    }

    /// Read-only validation against injected lookups. Expects codes to be
    /// normalized already.
    pub fn validate_with<D>(&self, directory: &D) -> Result<(), AddressInvalidation>
    where
        D: TerritoryDirectory + ?Sized,
    {
        let subdivision = self
            .subdivision_code
            .as_deref()
            .map(|code| {
                directory
                    .find_subdivision(code)
                    .ok_or_else(|| AddressInvalidation::InvalidSubdivision(code.to_owned()))
            })
            .transpose()?;
        if let Some(code) = self.country_code.as_deref() {
            if directory.find_country(code).is_none() {
                return Err(AddressInvalidation::InvalidCountry(code.to_owned()));
            }
        }
        if let (Some(subdivision), Some(country)) = (subdivision, self.country_code.as_deref()) {
            if subdivision.country_alpha2() != country {
                return Err(AddressInvalidation::CountryMismatch {
                    country: country.to_owned(),
                    subdivision: subdivision.code.to_owned(),
                });
            }
        }
        for field in Self::REQUIRED_FIELDS {
            if self.get(field).is_none() {
                return Err(AddressInvalidation::MissingField(field));
            }
        }
        Ok(())
    }

    /// Non-throwing validation: checks a normalized copy and leaves the
    /// record itself untouched.
    pub fn is_valid(&self) -> bool {
        self.clone().normalize_and_validate().is_ok()
    }

    pub fn country(&self) -> Option<&'static Country> {
        self.country_code
            .as_deref()
            .and_then(|code| directory().find_country(code))
    }

    pub fn subdivision(&self) -> Option<&'static Subdivision> {
        self.subdivision_code
            .as_deref()
            .and_then(|code| directory().find_subdivision(code))
    }

    pub fn country_name(&self) -> Option<&'static str> {
        self.country().map(|country| country.name)
    }

    pub fn subdivision_name(&self) -> Option<&'static str> {
        self.subdivision().map(|subdivision| subdivision.name)
    }

    pub fn subdivision_category(&self) -> Option<&'static str> {
        self.subdivision().map(|subdivision| subdivision.category)
    }

    pub fn subdivision_category_id(&self) -> Option<String> {
        self.subdivision().map(Subdivision::category_id)
    }

    /// Display label for the legacy free-text state field.
    pub fn state(&self) -> Option<&'static str> {
        self.subdivision_name()
    }

    /// Renders the address block, skipping absent lines:
    ///
    /// 1. `line1`
    /// 2. `line2`
    /// 3. `postal_code` joined by `" - "` to `city` and the subdivision
    ///    name joined by `", "`
    /// 4. country display name
    pub fn render(&self, separator: &str) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(4);
        if let Some(line1) = &self.line1 {
            lines.push(line1.clone());
        }
        if let Some(line2) = &self.line2 {
            lines.push(line2.clone());
        }
        let locality = self
            .city
            .as_deref()
            .into_iter()
            .chain(self.state())
            .join(", ");
        match (self.postal_code.as_deref(), locality.is_empty()) {
            (Some(postal_code), false) => lines.push(format!("{postal_code} - {locality}")),
            (Some(postal_code), true) => lines.push(postal_code.to_owned()),
            (None, false) => lines.push(locality),
            (None, true) => {}
        }
        if let Some(country_name) = self.country_name() {
            lines.push(country_name.to_owned());
        }
        lines.join(separator)
    }
}

impl AutoCorrect for AddressRecord {
    /// Casing/whitespace normalization, in order: codes are trimmed and
    /// upper-cased, blank values become absent, a lone `line2` moves up.
    fn auto_correct(mut self) -> Self {
        for field in [Field::CountryCode, Field::SubdivisionCode] {
            if let Some(code) = self.get(field).map(|code| code.trim().to_uppercase()) {
                self.set(field, Some(code));
            }
        }
        for field in Field::iter() {
            if self.get(field).is_some_and(|value| value.trim().is_empty()) {
                self.set(field, None);
            }
        }
        if self.line1.is_none() && self.line2.is_some() {
            mem::swap(&mut self.line1, &mut self.line2);
        }
        self
    }
}

impl Validate for AddressRecord {
    type Error = AddressInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        self.validate_with(directory())
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn downing_street() -> Vec<(&'static str, &'static str)> {
        vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "FR"),
        ]
    }

    #[test]
    fn default_values() {
        let address = AddressRecord::try_new(downing_street()).unwrap();
        assert_eq!(address.line1.as_deref(), Some("10 Downing Street"));
        assert_eq!(address.line2, None);
        assert_eq!(address.postal_code.as_deref(), Some("12345"));
        assert_eq!(address.city.as_deref(), Some("Paris"));
        assert_eq!(address.country_code.as_deref(), Some("FR"));
        assert_eq!(address.subdivision_code, None);
    }

    #[test]
    fn dict_access() {
        let address = AddressRecord::try_new(downing_street()).unwrap();
        assert_eq!(Field::iter().count(), 6);
        let items: Vec<_> = address.items().collect();
        assert_eq!(
            items,
            [
                (Field::Line1, Some("10 Downing Street")),
                (Field::Line2, None),
                (Field::PostalCode, Some("12345")),
                (Field::City, Some("Paris")),
                (Field::CountryCode, Some("FR")),
                (Field::SubdivisionCode, None),
            ]
        );
        assert_eq!(address.get_named("city").unwrap(), Some("Paris"));
        assert!(address.get_named("zipcode").is_err());
    }

    #[test]
    fn set_by_name() {
        let mut address = AddressRecord::try_new(downing_street()).unwrap();
        address
            .set_named("city", Some("Lille".to_owned()))
            .unwrap();
        assert_eq!(address.city.as_deref(), Some("Lille"));
        assert_eq!(
            address.set_named("zipcode", Some("59000".to_owned())),
            Err(UnknownFieldError("zipcode".to_owned()))
        );
    }

    #[test]
    fn unknown_field_rejected() {
        let err = AddressRecord::try_new(vec![("zipcode", "12345")]).unwrap_err();
        assert_eq!(
            err,
            AddressInvalidation::UnknownField("zipcode".to_owned())
        );
        let err = AddressRecord::try_new(vec![("zipcode", "12345"), ("town", "Paris")])
            .unwrap_err();
        assert_eq!(
            err,
            AddressInvalidation::UnknownField("zipcode, town".to_owned())
        );
    }

    #[test]
    fn blank_string_normalization() {
        let address = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("line2", ""),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "FR"),
            ("subdivision_code", "   "),
        ])
        .unwrap();
        assert_eq!(address.line2, None);
        assert_eq!(address.subdivision_code, None);
    }

    #[test]
    fn blank_line_swap() {
        let address = AddressRecord::try_new(vec![
            ("line1", ""),
            ("line2", "Apt 4"),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "FR"),
        ])
        .unwrap();
        assert_eq!(address.line1.as_deref(), Some("Apt 4"));
        assert_eq!(address.line2, None);
    }

    #[test]
    fn code_normalization() {
        let address = AddressRecord::try_new(vec![
            ("line1", "666, hell street"),
            ("line2", ""),
            ("postal_code", "F-6666"),
            ("city", "Satantown"),
            ("country_code", " fr          "),
            ("subdivision_code", "fR-66  "),
        ])
        .unwrap();
        assert_eq!(address.line1.as_deref(), Some("666, hell street"));
        assert_eq!(address.line2, None);
        assert_eq!(address.postal_code.as_deref(), Some("F-6666"));
        assert_eq!(address.city.as_deref(), Some("Satantown"));
        assert_eq!(address.country_code.as_deref(), Some("FR"));
        assert_eq!(address.subdivision_code.as_deref(), Some("FR-66"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut address = AddressRecord::try_new(vec![
            ("line1", "  "),
            ("line2", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Lille"),
            ("subdivision_code", " fr-59"),
        ])
        .unwrap();
        let once = address.clone();
        address.normalize_and_validate().unwrap();
        assert_eq!(address, once);
    }

    #[test]
    fn country_derived_from_subdivision() {
        let address = AddressRecord::try_new(vec![
            ("line1", "1 Yonge Street"),
            ("postal_code", "M5E 1E5"),
            ("city", "Toronto"),
            ("subdivision_code", "CA-ON"),
        ])
        .unwrap();
        assert_eq!(address.country_code.as_deref(), Some("CA"));
        assert_eq!(address.subdivision_name(), Some("Ontario"));
        assert_eq!(address.subdivision_category(), Some("Province"));
        assert_eq!(address.country_name(), Some("Canada"));
    }

    #[test]
    fn country_subdivision_consistency() {
        AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "FR"),
            ("subdivision_code", "FR-75"),
        ])
        .unwrap();
        let err = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "FR"),
            ("subdivision_code", "US-CA"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            AddressInvalidation::CountryMismatch {
                country: "FR".to_owned(),
                subdivision: "US-CA".to_owned(),
            }
        );
    }

    #[test]
    fn invalid_codes_rejected() {
        let err = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "ZZ"),
        ])
        .unwrap_err();
        assert_eq!(err, AddressInvalidation::InvalidCountry("ZZ".to_owned()));
        let err = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("subdivision_code", "FR-999"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            AddressInvalidation::InvalidSubdivision("FR-999".to_owned())
        );
    }

    #[test]
    fn missing_required_fields() {
        let err = AddressRecord::try_new(vec![
            ("postal_code", "12345"),
            ("city", "Paris"),
            ("country_code", "FR"),
        ])
        .unwrap_err();
        assert_eq!(err, AddressInvalidation::MissingField(Field::Line1));
        let err = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Paris"),
        ])
        .unwrap_err();
        assert_eq!(err, AddressInvalidation::MissingField(Field::CountryCode));
    }

    #[test]
    fn is_valid_does_not_mutate() {
        let mut address = AddressRecord::default();
        address.line1 = Some("10 Downing Street".to_owned());
        assert!(!address.is_valid());
        address.postal_code = Some("12345".to_owned());
        address.city = Some("Paris".to_owned());
        address.country_code = Some(" fr ".to_owned());
        assert!(address.is_valid());
        // The checked copy was normalized, the record itself was not.
        assert_eq!(address.country_code.as_deref(), Some(" fr "));
    }

    #[test]
    fn emptiness_ignores_subdivision() {
        assert!(AddressRecord::default().is_empty());
        let record = AddressRecord {
            subdivision_code: Some("FR-59".to_owned()),
            ..Default::default()
        };
        assert!(record.is_empty());
        let record = AddressRecord {
            city: Some("Paris".to_owned()),
            ..Default::default()
        };
        assert!(!record.is_empty());
    }

    #[test]
    fn render_full_block() {
        let address = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("line2", "Apt 4"),
            ("postal_code", "59000"),
            ("city", "Lille"),
            ("subdivision_code", "FR-59"),
        ])
        .unwrap();
        assert_eq!(
            address.render("\n"),
            "10 Downing Street\nApt 4\n59000 - Lille, Nord\nFrance"
        );
        assert_eq!(address.to_string(), address.render("\n"));
    }

    #[test]
    fn render_skips_absent_lines() {
        let address = AddressRecord::try_new(downing_street()).unwrap();
        assert_eq!(
            address.render(" | "),
            "10 Downing Street | 12345 - Paris | France"
        );
        let mut address = AddressRecord::default();
        address.city = Some("Paris".to_owned());
        assert_eq!(address.render("\n"), "Paris");
        address.city = None;
        address.postal_code = Some("12345".to_owned());
        assert_eq!(address.render("\n"), "12345");
        assert_eq!(AddressRecord::default().render("\n"), "");
    }

    #[test]
    fn derived_accessors() {
        let address = AddressRecord::try_new(vec![
            ("line1", "10 Downing Street"),
            ("postal_code", "12345"),
            ("city", "Lille"),
            ("subdivision_code", "FR-59"),
        ])
        .unwrap();
        assert_eq!(address.country_name(), Some("France"));
        assert_eq!(address.subdivision_name(), Some("Nord"));
        assert_eq!(address.subdivision_category(), Some("Metropolitan department"));
        assert_eq!(
            address.subdivision_category_id().as_deref(),
            Some("metropolitan_department")
        );
        assert_eq!(address.state(), Some("Nord"));

        let address = AddressRecord::try_new(downing_street()).unwrap();
        assert_eq!(address.subdivision_name(), None);
        assert_eq!(address.subdivision_category_id(), None);
        assert_eq!(address.state(), None);
    }

    #[test]
    fn injected_directory() {
        struct EmptyDirectory;
        impl TerritoryDirectory for EmptyDirectory {
            fn find_country(&self, _: &str) -> Option<&Country> {
                None
            }
            fn find_subdivision(&self, _: &str) -> Option<&Subdivision> {
                None
            }
            fn country_codes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
                Box::new(std::iter::empty())
            }
            fn subdivision_codes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
                Box::new(std::iter::empty())
            }
        }
        let mut record = AddressRecord::try_new(downing_street()).unwrap();
        assert_eq!(
            record.normalize_and_validate_with(&EmptyDirectory),
            Err(AddressInvalidation::InvalidCountry("FR".to_owned()))
        );
    }
}
