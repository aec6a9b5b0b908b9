//! Static ISO 3166 reference tables.

mod countries;
mod subdivisions;

pub(crate) use self::{countries::COUNTRIES, subdivisions::SUBDIVISIONS};
