/// An ISO 3166-1 country entry.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Two-letter ISO 3166-1 alpha-2 code, e.g. `"FR"`.
    pub alpha2 : &'static str,
    /// Official short name, e.g. `"France"`.
    pub name   : &'static str,
}
