//! countryinfo prelude: bring common types and functions into scope.

#![allow(unused_imports)]

pub use crate::api::CountryView;
pub use crate::data::{Country, VERSION};
pub use crate::error::{CountryInfoError, Result};
pub use crate::lookup::{for_code, try_for_code, CodeQuery};
pub use crate::model::CountryInfo;
pub use crate::registry::{all, Registry, RegistryStats};
#[cfg(feature = "search")]
pub use crate::search::{find_by_name, find_by_name_substring};
