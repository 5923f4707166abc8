// crates/countryinfo-core/src/lib.rs

//! # countryinfo-core
//!
//! Read-only lookup of ISO 3166-1 countries and the adjacent coding schemes
//! (ITU, FIPS, IOC, FIFA, DS, WMO, GAUL, MARC, dial prefix, ccTLD).
//!
//! The 249 records are compiled into the binary. The registry and its
//! alpha-2 / alpha-3 / numeric indices are built once, on first use, and
//! never change afterwards, so lookups are safe from any number of threads.
//!
//! ```rust
//! use countryinfo_core::prelude::*;
//!
//! let jp = for_code("jp").unwrap();
//! assert_eq!(jp.alpha3(), "JPN");
//! assert_eq!(jp.numeric(), 392);
//! assert_eq!(jp.name(), "Japan");
//!
//! let fr = for_code(250).unwrap();
//! assert_eq!(fr.alpha2(), "FR");
//!
//! assert!(for_code("ZZ").is_err());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod data;
pub mod error;
pub mod lookup;
pub mod model;
pub mod prelude;
pub mod registry;
#[cfg(feature = "search")]
pub mod search;
pub mod text;

// Re-exports
pub use crate::data::{Country, COUNT, VERSION};
pub use crate::error::{CountryInfoError, KeyKind, Result};
pub use crate::lookup::{for_code, try_for_code, CodeQuery};
pub use crate::model::CountryInfo;
pub use crate::registry::{all, by_alpha2, by_alpha3, by_numeric, Registry, RegistryStats};
#[cfg(feature = "search")]
pub use crate::search::{find_by_name, find_by_name_substring};
