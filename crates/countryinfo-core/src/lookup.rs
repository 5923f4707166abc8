// crates/countryinfo-core/src/lookup.rs

//! # Lookup
//!
//! [`for_code`] accepts an alpha-2 code, an alpha-3 code or a numeric code
//! and resolves it against the shared [`Registry`].
//!
//! Text codes are folded to uppercase with ASCII rules and dispatched on
//! their length: two chars go to the alpha-2 index, three to the alpha-3
//! index, anything else misses. Whitespace and punctuation are kept, so
//! `" us"` does not match.
//!
//! A miss is always [`CountryInfoError::InvalidCode`]; there is no
//! placeholder "unknown" record.

use crate::error::{CountryInfoError, Result};
use crate::model::CountryInfo;
use crate::registry::Registry;
use crate::text::fold_ascii_upper;

/// Anything [`for_code`] can resolve.
///
/// Implemented for string codes, for integer codes and for `Option` of
/// either, where `None` never matches.
pub trait CodeQuery {
    fn resolve(self, registry: &Registry) -> Option<&'static CountryInfo>;
}

impl CodeQuery for &str {
    fn resolve(self, registry: &Registry) -> Option<&'static CountryInfo> {
        resolve_text(registry, self)
    }
}

impl CodeQuery for &String {
    fn resolve(self, registry: &Registry) -> Option<&'static CountryInfo> {
        resolve_text(registry, self)
    }
}

impl CodeQuery for String {
    fn resolve(self, registry: &Registry) -> Option<&'static CountryInfo> {
        resolve_text(registry, &self)
    }
}

impl<T: CodeQuery> CodeQuery for Option<T> {
    fn resolve(self, registry: &Registry) -> Option<&'static CountryInfo> {
        self.and_then(|code| code.resolve(registry))
    }
}

macro_rules! numeric_query {
    ($($t:ty),*) => {$(
        impl CodeQuery for $t {
            fn resolve(self, registry: &Registry) -> Option<&'static CountryInfo> {
                let hit = u16::try_from(self).ok().and_then(|n| registry.by_numeric(n));
                if hit.is_none() {
                    tracing::trace!(code = self, "no country for numeric code");
                }
                hit
            }
        }
    )*};
}

numeric_query!(u16, u32, u64, usize, i32, i64);

fn resolve_text(registry: &Registry, code: &str) -> Option<&'static CountryInfo> {
    let code = fold_ascii_upper(code);
    let hit = match code.chars().count() {
        2 => registry.by_alpha2(&code),
        3 => registry.by_alpha3(&code),
        _ => None,
    };
    if hit.is_none() {
        tracing::trace!(code = %code, "no country for code");
    }
    hit
}

/// Resolves an ISO 3166-1 alpha-2, alpha-3 or numeric code.
///
/// ```rust
/// use countryinfo_core::{for_code, CountryInfoError};
///
/// assert_eq!(for_code("gb").unwrap().name(), "United Kingdom");
/// assert_eq!(for_code("DEU").unwrap().numeric(), 276);
/// assert_eq!(for_code(392).unwrap().alpha2(), "JP");
/// assert_eq!(for_code("ABCD"), Err(CountryInfoError::InvalidCode));
/// ```
pub fn for_code(code: impl CodeQuery) -> Result<&'static CountryInfo> {
    try_for_code(code).ok_or(CountryInfoError::InvalidCode)
}

/// Like [`for_code`], with a miss reported as `None`.
pub fn try_for_code(code: impl CodeQuery) -> Option<&'static CountryInfo> {
    code.resolve(Registry::global())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha3(code: impl CodeQuery) -> Option<&'static str> {
        try_for_code(code).map(CountryInfo::alpha3)
    }

    #[test]
    fn case_variants_resolve_to_same_record() {
        let us = for_code("US").unwrap();
        assert_eq!(for_code("us").unwrap(), us);
        assert_eq!(for_code("Us").unwrap(), us);
        assert_eq!(for_code("uSa").unwrap(), us);
    }

    #[test]
    fn dispatches_on_length() {
        assert_eq!(alpha3("JP"), Some("JPN"));
        assert_eq!(alpha3("jpn"), Some("JPN"));
        assert_eq!(alpha3(""), None);
        assert_eq!(alpha3("J"), None);
        assert_eq!(alpha3("ABCD"), None);
        assert_eq!(alpha3("Japan"), None);
    }

    #[test]
    fn no_trimming() {
        assert_eq!(alpha3(" jp"), None);
        assert_eq!(alpha3("jp "), None);
        assert_eq!(alpha3("j."), None);
    }

    #[test]
    fn non_ascii_letters_never_match() {
        assert_eq!(alpha3("ĵp"), None);
        assert_eq!(alpha3("ｊｐ"), None);
    }

    #[test]
    fn none_is_not_found() {
        assert_eq!(for_code(None::<&str>), Err(CountryInfoError::InvalidCode));
        assert_eq!(alpha3(Some("fr")), Some("FRA"));
        assert_eq!(alpha3(None::<u16>), None);
    }

    #[test]
    fn owned_strings_resolve() {
        let code = String::from("nzl");
        assert_eq!(alpha3(&code), Some("NZL"));
        assert_eq!(alpha3(code), Some("NZL"));
    }

    #[test]
    fn numeric_codes() {
        assert_eq!(alpha3(250), Some("FRA"));
        assert_eq!(alpha3(250u16), Some("FRA"));
        assert_eq!(alpha3(250u64), Some("FRA"));
        assert_eq!(alpha3(4usize), Some("AFG"));
        assert_eq!(for_code(0), Err(CountryInfoError::InvalidCode));
        assert_eq!(alpha3(-250), None);
        assert_eq!(alpha3(1000), None);
        assert_eq!(alpha3(65_786i64), None);
    }
}
