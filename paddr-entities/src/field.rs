use std::{fmt, str::FromStr};

use strum::{EnumCount, EnumIter};
use thiserror::Error;

/// A recognized address component, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Field {
    Line1,
    Line2,
    PostalCode,
    City,
    CountryCode,
    SubdivisionCode,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Line1 => "line1",
            Field::Line2 => "line2",
            Field::PostalCode => "postal_code",
            Field::City => "city",
            Field::CountryCode => "country_code",
            Field::SubdivisionCode => "subdivision_code",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown address field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for Field {
    type Err = UnknownFieldError;
    fn from_str(s: &str) -> Result<Field, Self::Err> {
        match s {
            "line1" => Ok(Field::Line1),
            "line2" => Ok(Field::Line2),
            "postal_code" => Ok(Field::PostalCode),
            "city" => Ok(Field::City),
            "country_code" => Ok(Field::CountryCode),
            "subdivision_code" => Ok(Field::SubdivisionCode),
            _ => Err(UnknownFieldError(s.to_owned())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn field_from_str() {
        assert_eq!(Field::from_str("line1").unwrap(), Field::Line1);
        assert_eq!(Field::from_str("postal_code").unwrap(), Field::PostalCode);
        assert_eq!(
            Field::from_str("subdivision_code").unwrap(),
            Field::SubdivisionCode
        );
        // "zipcode" is a typo for "postal_code" and must be rejected.
        assert_eq!(
            Field::from_str("zipcode").unwrap_err(),
            UnknownFieldError("zipcode".into())
        );
        assert!(Field::from_str("").is_err());
    }

    #[test]
    fn canonical_order() {
        let names: Vec<_> = Field::iter().map(Field::name).collect();
        assert_eq!(
            names,
            [
                "line1",
                "line2",
                "postal_code",
                "city",
                "country_code",
                "subdivision_code"
            ]
        );
        assert_eq!(Field::COUNT, 6);
    }

    #[test]
    fn names_round_trip() {
        for field in Field::iter() {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }
}
