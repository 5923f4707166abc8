//! Basic usage example for countryinfo-rs
//!
//! This example demonstrates how to:
//! - Resolve a country by alpha-2, alpha-3 or numeric code
//! - Read the alternative coding schemes of a record
//! - Iterate the registry
//! - Search by display name

use countryinfo_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== countryinfo-rs Basic Usage Example (table {VERSION}) ===\n");

    // Example 1: Lookup by any ISO 3166-1 code
    println!("--- Example 1: Resolve codes ---");
    for code in ["JP", "jpn", "gb"] {
        let c = for_code(code)?;
        println!("{code:>4} -> {c}");
    }
    println!(" 250 -> {}", for_code(250)?);
    println!();

    // Example 2: Everything we know about one country
    println!("--- Example 2: All codes for Japan ---");
    let jp = for_code("JP")?;
    println!("Country name            = {}", jp.name());
    println!("ISO 3166-1 alpha-3 code = {}", jp.alpha3());
    println!("ISO 3166-1 alpha-2 code = {}", jp.alpha2());
    println!("ISO 3166-1 numeric code = {}", jp.numeric_str());
    println!("ccTLD                   = {}", jp.cc_tld());
    println!("ITU / FIPS / IOC / FIFA = {} / {} / {} / {}", jp.itu(), jp.fips(), jp.ioc(), jp.fifa());
    println!("DS / WMO / GAUL / MARC  = {} / {} / {} / {}", jp.ds(), jp.wmo(), jp.gaul(), jp.marc());
    println!("Dial                    = +{}", jp.dial());
    println!("Independent             = {}", jp.independent_status());
    println!();

    // Example 3: Registry overview
    println!("--- Example 3: Registry ---");
    let stats = Registry::global().stats();
    println!("Total countries: {}", stats.countries);
    println!("Independent: {}, dependent: {}", stats.independent, stats.dependent);
    for (i, c) in all().iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, c.name(), c.alpha3());
    }
    println!("... and {} more\n", all().len() - 5);

    // Example 4: Multiple dial codes
    println!("--- Example 4: Dial codes ---");
    let dom = Country::DOM.info();
    for dial in dom.dial_codes() {
        println!("{} +{dial}", dom.name());
    }
    println!();

    // Example 5: Name search
    println!("--- Example 5: Search by name ---");
    for c in find_by_name_substring("island") {
        println!("- {} ({})", c.name(), c.alpha2());
    }

    Ok(())
}
