// crates/countryinfo-core/src/error.rs
use std::fmt;
use thiserror::Error;

/// Which index a table key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Alpha3,
    Alpha2,
    Numeric,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyKind::Alpha3 => "alpha-3",
            KeyKind::Alpha2 => "alpha-2",
            KeyKind::Numeric => "numeric",
        })
    }
}

/// Errors produced by this crate.
///
/// Only [`CountryInfoError::InvalidCode`] is a lookup result; every other
/// variant describes a broken country table and is raised while the
/// registry is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryInfoError {
    /// The code did not resolve to any country.
    #[error("invalid ISO 3166 code")]
    InvalidCode,

    #[error("duplicate {kind} key `{key}` in country table")]
    DuplicateKey { kind: KeyKind, key: String },

    #[error("malformed {kind} key `{key}` in country table")]
    MalformedKey { kind: KeyKind, key: String },

    /// Rows must be sorted by alpha-3; `key` is the first row out of place.
    #[error("country table is not sorted by alpha-3 at `{key}`")]
    OutOfOrder { key: String },
}

impl CountryInfoError {
    /// `true` for the table integrity variants, which are never recoverable.
    pub fn is_integrity_violation(&self) -> bool {
        !matches!(self, CountryInfoError::InvalidCode)
    }
}

pub type Result<T> = std::result::Result<T, CountryInfoError>;
