// crates/countryinfo-core/src/registry.rs

//! # Country Registry
//!
//! The ordered record table plus its three reverse indices. The process-wide
//! instance is built on first access and is immutable afterwards.

use crate::data;
use crate::error::{CountryInfoError, KeyKind, Result};
use crate::model::CountryInfo;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

static REGISTRY: Lazy<Registry> = Lazy::new(|| match Registry::build(data::table()) {
    Ok(registry) => registry,
    // The embedded table is part of the library; a broken one must not serve lookups.
    Err(e) => panic!("country table integrity violation: {e}"),
});

/// Simple aggregate counts over the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub countries: usize,
    /// Records whose status is exactly `"Yes"`.
    pub independent: usize,
    pub dependent: usize,
    pub with_cc_tld: usize,
}

/// Records in alpha-3 order with alpha-3, alpha-2 and numeric indices.
#[derive(Debug)]
pub struct Registry {
    records: &'static [CountryInfo],
    alpha3: HashMap<&'static str, usize>,
    alpha2: HashMap<&'static str, usize>,
    numeric: HashMap<u16, usize>,
}

impl Registry {
    /// The shared registry over the embedded table.
    ///
    /// # Panics
    ///
    /// On first access, if the embedded table violates its integrity rules.
    pub fn global() -> &'static Registry {
        &REGISTRY
    }

    /// Validates `rows` and indexes them.
    ///
    /// Rows must be sorted by alpha-3 with well-formed keys. Alpha-3 must be
    /// unique; alpha-2 must be unique where non-empty and numeric where
    /// non-zero. Empty alpha-2 and zero numeric are left out of the indices.
    pub fn build(rows: &'static [CountryInfo]) -> Result<Self> {
        let mut alpha3 = HashMap::with_capacity(rows.len());
        let mut alpha2 = HashMap::with_capacity(rows.len());
        let mut numeric = HashMap::with_capacity(rows.len());
        let mut prev: Option<&str> = None;

        for (idx, row) in rows.iter().enumerate() {
            if !is_upper_alpha(row.alpha3, 3) {
                return Err(violation(CountryInfoError::MalformedKey {
                    kind: KeyKind::Alpha3,
                    key: row.alpha3.to_owned(),
                }));
            }
            insert_unique(&mut alpha3, row.alpha3, idx, KeyKind::Alpha3)?;
            if prev.is_some_and(|p| p > row.alpha3) {
                return Err(violation(CountryInfoError::OutOfOrder {
                    key: row.alpha3.to_owned(),
                }));
            }
            prev = Some(row.alpha3);

            if !row.alpha2.is_empty() {
                if !is_upper_alpha(row.alpha2, 2) {
                    return Err(violation(CountryInfoError::MalformedKey {
                        kind: KeyKind::Alpha2,
                        key: row.alpha2.to_owned(),
                    }));
                }
                insert_unique(&mut alpha2, row.alpha2, idx, KeyKind::Alpha2)?;
            }

            if row.numeric > 999 {
                return Err(violation(CountryInfoError::MalformedKey {
                    kind: KeyKind::Numeric,
                    key: row.numeric.to_string(),
                }));
            }
            if row.numeric != 0 {
                insert_unique(&mut numeric, row.numeric, idx, KeyKind::Numeric)?;
            }
        }

        tracing::debug!(
            countries = rows.len(),
            alpha2 = alpha2.len(),
            numeric = numeric.len(),
            "country registry built"
        );

        Ok(Self {
            records: rows,
            alpha3,
            alpha2,
            numeric,
        })
    }

    /// All records, alpha-3 ascending.
    pub fn all(&self) -> &'static [CountryInfo] {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'static, CountryInfo> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Positional access in alpha-3 order.
    pub fn get(&self, index: usize) -> Option<&'static CountryInfo> {
        self.records.get(index)
    }

    /// Exact, case-sensitive alpha-3 lookup (`"JPN"`).
    pub fn by_alpha3(&self, code: &str) -> Option<&'static CountryInfo> {
        self.alpha3.get(code).map(|&i| &self.records[i])
    }

    /// Exact, case-sensitive alpha-2 lookup (`"JP"`).
    pub fn by_alpha2(&self, code: &str) -> Option<&'static CountryInfo> {
        self.alpha2.get(code).map(|&i| &self.records[i])
    }

    /// Numeric lookup. `0` never matches.
    pub fn by_numeric(&self, code: u16) -> Option<&'static CountryInfo> {
        self.numeric.get(&code).map(|&i| &self.records[i])
    }

    pub fn stats(&self) -> RegistryStats {
        let independent = self.iter().filter(|c| c.is_independent()).count();
        RegistryStats {
            countries: self.len(),
            independent,
            dependent: self.len() - independent,
            with_cc_tld: self.iter().filter(|c| !c.cc_tld().is_empty()).count(),
        }
    }
}

impl IntoIterator for &Registry {
    type Item = &'static CountryInfo;
    type IntoIter = std::slice::Iter<'static, CountryInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// All records of the shared registry, alpha-3 ascending.
pub fn all() -> &'static [CountryInfo] {
    Registry::global().all()
}

pub fn by_alpha3(code: &str) -> Option<&'static CountryInfo> {
    Registry::global().by_alpha3(code)
}

pub fn by_alpha2(code: &str) -> Option<&'static CountryInfo> {
    Registry::global().by_alpha2(code)
}

pub fn by_numeric(code: u16) -> Option<&'static CountryInfo> {
    Registry::global().by_numeric(code)
}

fn is_upper_alpha(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_uppercase())
}

fn insert_unique<K>(map: &mut HashMap<K, usize>, key: K, idx: usize, kind: KeyKind) -> Result<()>
where
    K: std::hash::Hash + Eq + ToString,
{
    match map.entry(key) {
        Entry::Occupied(e) => Err(violation(CountryInfoError::DuplicateKey {
            kind,
            key: e.key().to_string(),
        })),
        Entry::Vacant(e) => {
            e.insert(idx);
            Ok(())
        }
    }
}

fn violation(err: CountryInfoError) -> CountryInfoError {
    tracing::error!(error = %err, "rejecting country table");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Country;

    fn row(alpha3: &'static str, alpha2: &'static str, numeric: u16) -> CountryInfo {
        CountryInfo {
            alpha3,
            alpha2,
            numeric,
            ..Country::ABW.info().clone()
        }
    }

    fn leak(rows: Vec<CountryInfo>) -> &'static [CountryInfo] {
        Box::leak(rows.into_boxed_slice())
    }

    #[test]
    fn global_registry_holds_whole_table() {
        let reg = Registry::global();
        assert_eq!(reg.len(), 249);
        assert!(!reg.is_empty());
        assert_eq!(reg.get(0).map(CountryInfo::alpha3), Some("ABW"));
        assert_eq!(reg.get(248).map(CountryInfo::alpha3), Some("ZWE"));
        assert!(reg.get(249).is_none());
    }

    #[test]
    fn index_lookups_are_exact() {
        assert_eq!(by_alpha3("USA").map(CountryInfo::name), Some("United States of America"));
        assert!(by_alpha3("usa").is_none());
        assert_eq!(by_alpha2("JP").map(CountryInfo::alpha3), Some("JPN"));
        assert!(by_alpha2("jp").is_none());
        assert_eq!(by_numeric(276).map(CountryInfo::alpha3), Some("DEU"));
    }

    #[test]
    fn empty_and_zero_keys_never_match() {
        assert!(by_alpha3("").is_none());
        assert!(by_alpha2("").is_none());
        assert!(by_numeric(0).is_none());
        assert!(by_numeric(1000).is_none());
    }

    #[test]
    fn stats_count_the_table() {
        let stats = Registry::global().stats();
        assert_eq!(stats.countries, 249);
        assert_eq!(stats.independent, 195);
        assert_eq!(stats.dependent, 54);
        assert_eq!(stats.with_cc_tld, 244);
    }

    #[test]
    fn stats_survive_a_json_round_trip() {
        let stats = Registry::global().stats();
        let json = serde_json::to_string(&stats).unwrap();
        let back: RegistryStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn iterating_a_registry_yields_table_order() {
        let mut seen = 0;
        for (country, expected) in Registry::global().into_iter().zip(Country::ALL) {
            assert_eq!(country.country(), expected);
            seen += 1;
        }
        assert_eq!(seen, 249);

        let reg = Registry::global();
        let names: Vec<_> = reg.into_iter().take(2).map(CountryInfo::name).collect();
        assert_eq!(names, ["Aruba", "Afghanistan"]);
    }

    #[test]
    fn empty_alpha2_and_zero_numeric_stay_out_of_indices() {
        let reg = Registry::build(leak(vec![row("AAA", "", 0), row("BBB", "", 0)])).unwrap();
        assert_eq!(reg.len(), 2);
        assert!(reg.by_alpha2("").is_none());
        assert!(reg.by_numeric(0).is_none());
        assert_eq!(reg.by_alpha3("BBB").map(CountryInfo::alpha3), Some("BBB"));
    }

    #[test]
    fn rejects_duplicate_alpha3() {
        let err = Registry::build(leak(vec![row("AAA", "AA", 1), row("AAA", "AB", 2)])).unwrap_err();
        assert_eq!(
            err,
            CountryInfoError::DuplicateKey {
                kind: KeyKind::Alpha3,
                key: "AAA".into()
            }
        );
    }

    #[test]
    fn rejects_duplicate_alpha2() {
        let err = Registry::build(leak(vec![row("AAA", "AA", 1), row("BBB", "AA", 2)])).unwrap_err();
        assert_eq!(
            err,
            CountryInfoError::DuplicateKey {
                kind: KeyKind::Alpha2,
                key: "AA".into()
            }
        );
    }

    #[test]
    fn rejects_duplicate_numeric() {
        let err = Registry::build(leak(vec![row("AAA", "AA", 7), row("BBB", "BB", 7)])).unwrap_err();
        assert_eq!(
            err,
            CountryInfoError::DuplicateKey {
                kind: KeyKind::Numeric,
                key: "7".into()
            }
        );
        assert!(err.is_integrity_violation());
    }

    #[test]
    fn rejects_malformed_keys() {
        let cases = [
            (row("AA", "AA", 1), KeyKind::Alpha3),
            (row("aaa", "AA", 1), KeyKind::Alpha3),
            (row("AAA", "A1", 1), KeyKind::Alpha2),
            (row("AAA", "AA", 1000), KeyKind::Numeric),
        ];
        for (bad, kind) in cases {
            match Registry::build(leak(vec![bad])) {
                Err(CountryInfoError::MalformedKey { kind: k, .. }) => assert_eq!(k, kind),
                other => panic!("expected malformed {kind} key, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_unsorted_rows() {
        let err = Registry::build(leak(vec![row("BBB", "BB", 2), row("AAA", "AA", 1)])).unwrap_err();
        assert_eq!(err, CountryInfoError::OutOfOrder { key: "AAA".into() });
    }
}
