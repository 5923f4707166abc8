// crates/countryinfo-core/src/search.rs

//! Accent-insensitive lookup by English display name.
//!
//! Matching runs on [`fold_key`], so `"aland"`, `"ÅLAND"` and `"Åland"` are
//! equivalent. Name search is a convenience only; codes go through
//! [`crate::for_code`].

use crate::model::CountryInfo;
use crate::registry::Registry;
use crate::text::fold_key;

/// Exact name match after folding.
///
/// ```rust
/// use countryinfo_core::find_by_name;
///
/// assert_eq!(find_by_name("curacao").map(|c| c.alpha3()), Some("CUW"));
/// assert!(find_by_name("Atlantis").is_none());
/// ```
pub fn find_by_name(name: &str) -> Option<&'static CountryInfo> {
    let q = fold_key(name);
    if q.is_empty() {
        return None;
    }
    Registry::global().iter().find(|c| fold_key(c.name()) == q)
}

/// Every record whose folded name contains the folded query, alpha-3 order.
pub fn find_by_name_substring(substr: &str) -> Vec<&'static CountryInfo> {
    let q = fold_key(substr);
    if q.is_empty() {
        return Vec::new();
    }
    // Linear scan is fine for 249 rows.
    Registry::global()
        .iter()
        .filter(|c| fold_key(c.name()).contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(hits: Vec<&CountryInfo>) -> Vec<&str> {
        hits.into_iter().map(CountryInfo::alpha3).collect()
    }

    #[test]
    fn exact_name_ignores_accents_and_case() {
        assert_eq!(find_by_name("aland").map(CountryInfo::alpha3), Some("ALA"));
        assert_eq!(find_by_name("ÅLAND").map(CountryInfo::alpha3), Some("ALA"));
        assert_eq!(find_by_name("cote d'ivoire").map(CountryInfo::alpha3), Some("CIV"));
        assert_eq!(find_by_name("japan").map(CountryInfo::alpha3), Some("JPN"));
    }

    #[test]
    fn exact_name_needs_whole_name() {
        assert!(find_by_name("jap").is_none());
        assert!(find_by_name("").is_none());
        assert!(find_by_name("   ").is_none());
    }

    #[test]
    fn substring_returns_alpha3_order() {
        assert_eq!(
            codes(find_by_name_substring("guinea")),
            ["GIN", "GNB", "GNQ", "PNG"]
        );
        assert_eq!(codes(find_by_name_substring("virgin islands")), ["VGB", "VIR"]);
    }

    #[test]
    fn blank_substring_matches_nothing() {
        assert!(find_by_name_substring("").is_empty());
        assert!(find_by_name_substring(" \t").is_empty());
    }
}
