#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # paddr-territories
//!
//! Embedded ISO 3166 reference data for postal address validation.
//!
//! Provides the full ISO 3166-1 country list and the full ISO 3166-2
//! subdivision list as static tables, indexed once per process and exposed
//! through the [`TerritoryDirectory`] lookup contract.

mod data;

pub mod country;
pub mod directory;
pub mod subdivision;

pub use self::{
    country::Country,
    directory::{directory, territory_codes, IsoTerritoryDirectory, TerritoryDirectory},
    subdivision::Subdivision,
};
