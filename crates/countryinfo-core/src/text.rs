// crates/countryinfo-core/src/text.rs
use std::borrow::Cow;

/// Uppercases ASCII letters only; every other char is passed through.
///
/// Borrows when the input is already folded, which is the common case for
/// codes such as `"JP"`.
pub fn fold_ascii_upper(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(s.to_ascii_uppercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// Normalised key for name matching: transliterated to ASCII, lowercased,
/// with runs of whitespace collapsed.
///
/// `"Åland"` and `"Curaçao"` fold to `"aland"` and `"curacao"`.
#[cfg(feature = "search")]
pub fn fold_key(s: &str) -> String {
    let ascii = deunicode::deunicode(s);
    ascii
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_only() {
        assert_eq!(fold_ascii_upper("us"), "US");
        assert_eq!(fold_ascii_upper("Us"), "US");
        assert_eq!(fold_ascii_upper("åx"), "åX");
        assert!(matches!(fold_ascii_upper("JPN"), Cow::Borrowed(_)));
    }

    #[test]
    fn keeps_whitespace_and_punctuation() {
        assert_eq!(fold_ascii_upper(" us"), " US");
        assert_eq!(fold_ascii_upper("u-s"), "U-S");
    }

    #[cfg(feature = "search")]
    #[test]
    fn fold_key_strips_accents_and_case() {
        assert_eq!(fold_key("Åland"), "aland");
        assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
        assert_eq!(fold_key("  Saint   Barthélemy "), "saint barthelemy");
    }
}
