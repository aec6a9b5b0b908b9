use thiserror::Error;

use crate::field::{Field, UnknownFieldError};

/// Read-only consistency checks.
pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Lossless normalization that can be applied before validation.
pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

/// Why an address record failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressInvalidation {
    #[error("unknown address field(s): {0}")]
    UnknownField(String),
    #[error("unknown country code: {0}")]
    InvalidCountry(String),
    #[error("unknown subdivision code: {0}")]
    InvalidSubdivision(String),
    #[error("subdivision {subdivision} does not belong to country {country}")]
    CountryMismatch {
        country: String,
        subdivision: String,
    },
    #[error("address requires {0}")]
    MissingField(Field),
}

impl From<UnknownFieldError> for AddressInvalidation {
    fn from(from: UnknownFieldError) -> Self {
        Self::UnknownField(from.0)
    }
}
