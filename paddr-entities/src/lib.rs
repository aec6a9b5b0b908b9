#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # paddr-entities
//!
//! A postal address as a small value object: six component fields,
//! ISO 3166-1/3166-2 validation against [`paddr_territories`], casing and
//! whitespace normalization, and multi-line block rendering.

pub mod address;
pub mod field;
pub mod validate;

pub use self::{
    address::AddressRecord,
    field::{Field, UnknownFieldError},
    validate::{AddressInvalidation, AutoCorrect, Validate},
};
