//! Error handling example for countryinfo-rs
//!
//! This example demonstrates how lookups fail and how to recover.

use countryinfo_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countryinfo-rs Error Handling Example ===\n");

    // Example 1: Unknown but well-formed codes
    println!("--- Example 1: Codes that are not assigned ---");
    for code in ["XX", "YY", "ZZ", "ZZZ"] {
        match for_code(code) {
            Ok(c) => println!("  Found: {c}"),
            Err(e) => println!("  {code}: {e}"),
        }
    }
    println!();

    // Example 2: Malformed input
    println!("--- Example 2: Malformed input ---");
    for code in ["", "A", "ABCD", " us", "ÅX"] {
        match try_for_code(code) {
            Some(c) => println!("  Found: {c}"),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 3: Numeric codes
    println!("--- Example 3: Numeric codes ---");
    for n in [0, 250, 999, 1000, -1] {
        match for_code(n) {
            Ok(c) => println!("  {n}: {c}"),
            Err(e) => println!("  {n}: {e}"),
        }
    }
    println!();

    // Example 4: Optional input
    println!("--- Example 4: Missing input ---");
    let missing: Option<&str> = None;
    if let Err(e) = for_code(missing) {
        println!("  None: {e}");
    }

    // Example 5: Propagate with `?`
    let de = for_code("de")?;
    println!("\n  Propagated lookup: {de}");

    Ok(())
}
