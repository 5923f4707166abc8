// crates/countryinfo-core/src/model.rs
use crate::data::Country;
use std::fmt;

/// One country with its codes across every supported naming system.
///
/// Records are only ever handed out as `&'static CountryInfo` borrowed from
/// the embedded table. Empty strings mean "no code assigned" and are kept
/// as-is; none of the accessors turn them into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryInfo {
    pub(crate) country: Country,
    pub(crate) alpha3: &'static str,
    pub(crate) alpha2: &'static str,
    pub(crate) cc_tld: &'static str,
    pub(crate) numeric: u16,
    pub(crate) itu: &'static str,
    pub(crate) fips: &'static str,
    pub(crate) ioc: &'static str,
    pub(crate) fifa: &'static str,
    pub(crate) ds: &'static str,
    pub(crate) wmo: &'static str,
    pub(crate) gaul: &'static str,
    pub(crate) marc: &'static str,
    pub(crate) dial: &'static str,
    pub(crate) name: &'static str,
    pub(crate) independent: &'static str,
}

impl CountryInfo {
    /// The enum tag for this record.
    #[inline]
    pub fn country(&self) -> Country {
        self.country
    }

    /// ISO 3166-1 alpha-3 code, e.g. `"JPN"`.
    #[inline]
    pub fn alpha3(&self) -> &'static str {
        self.alpha3
    }

    /// ISO 3166-1 alpha-2 code, e.g. `"JP"`.
    #[inline]
    pub fn alpha2(&self) -> &'static str {
        self.alpha2
    }

    /// ISO 3166-1 numeric code, e.g. `392`.
    #[inline]
    pub fn numeric(&self) -> u16 {
        self.numeric
    }

    /// Numeric code in its conventional zero-padded form, e.g. `"004"`.
    pub fn numeric_str(&self) -> String {
        format!("{:03}", self.numeric)
    }

    /// Country-code top-level domain including the leading dot (`".uk"`).
    #[inline]
    pub fn cc_tld(&self) -> &'static str {
        self.cc_tld
    }

    #[inline]
    pub fn itu(&self) -> &'static str {
        self.itu
    }

    #[inline]
    pub fn fips(&self) -> &'static str {
        self.fips
    }

    #[inline]
    pub fn ioc(&self) -> &'static str {
        self.ioc
    }

    #[inline]
    pub fn fifa(&self) -> &'static str {
        self.fifa
    }

    /// International vehicle registration code (distinguishing sign).
    #[inline]
    pub fn ds(&self) -> &'static str {
        self.ds
    }

    #[inline]
    pub fn wmo(&self) -> &'static str {
        self.wmo
    }

    /// FAO GAUL code. Kept as text; some entities carry a comma list.
    #[inline]
    pub fn gaul(&self) -> &'static str {
        self.gaul
    }

    #[inline]
    pub fn marc(&self) -> &'static str {
        self.marc
    }

    /// International dial prefix exactly as tabulated (`"1-809,1-829,1-849"`).
    #[inline]
    pub fn dial(&self) -> &'static str {
        self.dial
    }

    /// Splits [`CountryInfo::dial`] on commas. Entries are returned verbatim.
    pub fn dial_codes(&self) -> impl Iterator<Item = &'static str> {
        self.dial.split(',').filter(|d| !d.is_empty())
    }

    /// English display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Free-form sovereignty label: `"Yes"`, `"Territory of GB"`, `"Part of FR"`, ...
    #[inline]
    pub fn independent_status(&self) -> &'static str {
        self.independent
    }

    pub fn is_independent(&self) -> bool {
        self.independent == "Yes"
    }
}

impl fmt::Display for CountryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.alpha3)
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Country;

    #[test]
    fn numeric_str_is_zero_padded() {
        assert_eq!(Country::AFG.info().numeric_str(), "004");
        assert_eq!(Country::ALB.info().numeric_str(), "008");
        assert_eq!(Country::USA.info().numeric_str(), "840");
    }

    #[test]
    fn dial_codes_split_on_commas_only() {
        let dom: Vec<_> = Country::DOM.info().dial_codes().collect();
        assert_eq!(dom, ["1-809", "1-829", "1-849"]);

        let vat: Vec<_> = Country::VAT.info().dial_codes().collect();
        assert_eq!(vat, ["39-06"]);

        assert_eq!(Country::UMI.info().dial_codes().count(), 0);
    }

    #[test]
    fn independence_is_exact_yes() {
        assert!(Country::DEU.info().is_independent());
        assert!(!Country::GRL.info().is_independent());
        assert!(!Country::ESH.info().is_independent());
        assert_eq!(Country::COK.info().independent_status(), "Associated with NZ");
    }

    #[test]
    fn display_shows_name_and_alpha3() {
        assert_eq!(Country::JPN.info().to_string(), "Japan (JPN)");
    }
}
