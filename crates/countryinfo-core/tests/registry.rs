use countryinfo_core::prelude::*;
use countryinfo_core::{by_alpha2, by_alpha3, by_numeric, COUNT};
use std::collections::HashSet;

#[test]
fn registry_has_249_records_in_alpha3_order() {
    let countries = all();
    assert_eq!(countries.len(), 249);
    assert_eq!(countries.len(), COUNT);
    assert!(countries.windows(2).all(|w| w[0].alpha3() < w[1].alpha3()));
}

#[test]
fn every_record_is_reachable_by_each_key() {
    for c in all() {
        assert_eq!(by_alpha3(c.alpha3()), Some(c), "alpha-3 {}", c.alpha3());
        if !c.alpha2().is_empty() {
            assert_eq!(by_alpha2(c.alpha2()), Some(c), "alpha-2 {}", c.alpha2());
        }
        if c.numeric() != 0 {
            assert_eq!(by_numeric(c.numeric()), Some(c), "numeric {}", c.numeric());
        }
    }
}

#[test]
fn keys_are_well_formed() {
    for c in all() {
        let a3 = c.alpha3();
        assert_eq!(a3.len(), 3, "{a3}");
        assert!(a3.bytes().all(|b| b.is_ascii_uppercase()), "{a3}");

        let a2 = c.alpha2();
        if !a2.is_empty() {
            assert_eq!(a2.len(), 2, "{a3}: {a2}");
            assert!(a2.bytes().all(|b| b.is_ascii_uppercase()), "{a3}: {a2}");
        }

        assert!(c.numeric() <= 999, "{a3}");
        assert!(!c.name().is_empty(), "{a3}");
        assert!(!c.independent_status().is_empty(), "{a3}");
        if !c.cc_tld().is_empty() {
            assert!(c.cc_tld().starts_with('.'), "{a3}: {}", c.cc_tld());
        }
    }
}

#[test]
fn keys_are_unique() {
    let mut a3 = HashSet::new();
    let mut a2 = HashSet::new();
    let mut num = HashSet::new();
    for c in all() {
        assert!(a3.insert(c.alpha3()), "duplicate alpha-3 {}", c.alpha3());
        if !c.alpha2().is_empty() {
            assert!(a2.insert(c.alpha2()), "duplicate alpha-2 {}", c.alpha2());
        }
        if c.numeric() != 0 {
            assert!(num.insert(c.numeric()), "duplicate numeric {}", c.numeric());
        }
    }
}

#[test]
fn lowercase_and_numeric_round_trip() {
    for c in all() {
        assert_eq!(for_code(c.alpha2().to_lowercase()), Ok(c));
        assert_eq!(for_code(c.alpha3().to_lowercase()), Ok(c));
        assert_eq!(for_code(c.numeric()), Ok(c));
        assert_eq!(c.country().info(), c);
    }
}

#[test]
fn empty_and_zero_keys_miss() {
    assert!(by_alpha2("").is_none());
    assert!(by_alpha3("").is_none());
    assert!(by_numeric(0).is_none());
}

#[test]
fn boundary_inputs_are_not_found() {
    assert_eq!(for_code(None::<&str>), Err(CountryInfoError::InvalidCode));
    assert_eq!(for_code(""), Err(CountryInfoError::InvalidCode));
    assert_eq!(for_code("ABCD"), Err(CountryInfoError::InvalidCode));
    assert_eq!(for_code("zz"), Err(CountryInfoError::InvalidCode));
    assert_eq!(for_code("ZZ"), Err(CountryInfoError::InvalidCode));
    assert_eq!(for_code(0), Err(CountryInfoError::InvalidCode));
}

#[test]
fn us_in_any_case() {
    let a = for_code("US").unwrap();
    assert_eq!(for_code("us"), Ok(a));
    assert_eq!(for_code("Us"), Ok(a));
    assert_eq!(a.alpha3(), "USA");
}

#[test]
fn literal_scenarios() {
    let cases = [
        (for_code("JP"), "JPN", "JP", 392, "Japan"),
        (for_code("jpn"), "JPN", "JP", 392, "Japan"),
        (for_code(250), "FRA", "FR", 250, "France"),
        (for_code("DE"), "DEU", "DE", 276, "Germany"),
        (for_code("gb"), "GBR", "GB", 826, "United Kingdom"),
    ];
    for (found, a3, a2, num, name) in cases {
        let c = found.unwrap();
        assert_eq!(c.alpha3(), a3);
        assert_eq!(c.alpha2(), a2);
        assert_eq!(c.numeric(), num);
        assert_eq!(c.name(), name);
    }
}

#[test]
fn field_values_are_kept_verbatim() {
    let usa = by_alpha3("USA").unwrap();
    assert_eq!(usa.dial(), "1");
    assert_eq!(usa.independent_status(), "Yes");

    assert_eq!(by_alpha3("DOM").unwrap().dial(), "1-809,1-829,1-849");
    assert_eq!(by_alpha3("VAT").unwrap().dial(), "39-06");
    assert_eq!(by_alpha3("EGY").unwrap().gaul(), "40765");

    let pse = by_alpha3("PSE").unwrap();
    assert_eq!(pse.fips(), "GZ,WE");
    assert_eq!(pse.gaul(), "91,267");
    assert_eq!(pse.itu(), "");
}

#[test]
fn enum_matches_registry() {
    for (country, info) in Country::ALL.iter().zip(all()) {
        assert_eq!(country.info(), info);
        assert_eq!(country.to_string(), info.alpha3());
    }
}

#[test]
fn version_is_a_date() {
    let v = VERSION;
    assert!((19000101..=29991231).contains(&v));
    let month = v / 100 % 100;
    let day = v % 100;
    assert!((1..=12).contains(&month));
    assert!((1..=31).contains(&day));
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = ["jp", "fra", "840", "nz"]
        .into_iter()
        .map(|code| {
            std::thread::spawn(move || match code.parse::<u16>() {
                Ok(n) => try_for_code(n).map(CountryInfo::alpha3),
                Err(_) => try_for_code(code).map(CountryInfo::alpha3),
            })
        })
        .collect();
    let got: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(got, [Some("JPN"), Some("FRA"), Some("USA"), Some("NZL")]);
    assert!(std::ptr::eq(Registry::global(), Registry::global()));
}
