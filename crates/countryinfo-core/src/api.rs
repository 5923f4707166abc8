// crates/countryinfo-core/src/api.rs

//! Serialisable views over [`CountryInfo`].
//!
//! [`CountryView`] fixes the public field names used in JSON output.
//! Unassigned codes serialise as `""`, never `null`.

use crate::model::CountryInfo;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Borrowed view of a record with the public field names.
#[derive(Debug, Clone, Copy)]
pub struct CountryView<'a>(pub &'a CountryInfo);

impl Serialize for CountryView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let c = self.0;
        let mut s = serializer.serialize_struct("CountryInfo", 15)?;
        s.serialize_field("alpha3", c.alpha3())?;
        s.serialize_field("alpha2", c.alpha2())?;
        s.serialize_field("numeric", &c.numeric())?;
        s.serialize_field("ccTLD", c.cc_tld())?;
        s.serialize_field("itu", c.itu())?;
        s.serialize_field("fips", c.fips())?;
        s.serialize_field("ioc", c.ioc())?;
        s.serialize_field("fifa", c.fifa())?;
        s.serialize_field("ds", c.ds())?;
        s.serialize_field("wmo", c.wmo())?;
        s.serialize_field("gaul", c.gaul())?;
        s.serialize_field("marc", c.marc())?;
        s.serialize_field("dial", c.dial())?;
        s.serialize_field("name", c.name())?;
        s.serialize_field("independentStatus", c.independent_status())?;
        s.end()
    }
}

impl Serialize for CountryInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        CountryView(self).serialize(serializer)
    }
}

impl<'a> From<&'a CountryInfo> for CountryView<'a> {
    fn from(c: &'a CountryInfo) -> Self {
        CountryView(c)
    }
}

/// Compact JSON object for one record.
#[cfg(feature = "json")]
pub fn to_json(country: &CountryInfo) -> serde_json::Result<String> {
    serde_json::to_string(&CountryView(country))
}

#[cfg(feature = "json")]
pub fn to_json_pretty(country: &CountryInfo) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CountryView(country))
}
