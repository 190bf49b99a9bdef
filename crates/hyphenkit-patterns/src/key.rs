//! Language selection keys.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

/// Sentinel region value that selects the language default table.
const NO_COUNTRY: &str = "none";

/// Identifies a pattern table: a language code plus an optional region.
///
/// Language codes are stored lowercase and region codes uppercase, so
/// `LanguageKey::new("EN", Some("us"))` and `LanguageKey::new("en", Some("US"))`
/// compare equal. An absent, empty, or `"none"` region selects the
/// language default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageKey {
    language: String,
    country: Option<String>,
}

impl LanguageKey {
    #[must_use]
    pub fn new(language: &str, country: Option<&str>) -> Self {
        let country = country
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(NO_COUNTRY))
            .map(str::to_ascii_uppercase);
        Self {
            language: language.trim().to_ascii_lowercase(),
            country,
        }
    }

    /// Key for the language default table.
    #[must_use]
    pub fn language_only(language: &str) -> Self {
        Self::new(language, None)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    #[must_use]
    pub fn is_language_default(&self) -> bool {
        self.country.is_none()
    }

    /// The same language without its region.
    #[must_use]
    pub fn language_default(&self) -> Self {
        Self {
            language: self.language.clone(),
            country: None,
        }
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for LanguageKey {
    type Err = PatternError;

    /// Parses `en`, `en_US`, `en-us` or `en_none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PatternError::InvalidLanguageKey { key: s.to_string() };
        let mut parts = s.trim().splitn(2, ['_', '-']);
        let language = parts.next().filter(|l| !l.is_empty()).ok_or_else(invalid)?;
        if !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        let country = parts.next();
        if country.is_some_and(|c| !c.chars().all(|ch| ch.is_ascii_alphanumeric())) {
            return Err(invalid());
        }
        Ok(Self::new(language, country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_normalized() {
        let a = LanguageKey::new("EN", Some("us"));
        let b = LanguageKey::new("en", Some("US"));
        assert_eq!(a, b);
        assert_eq!(a.language(), "en");
        assert_eq!(a.country(), Some("US"));
    }

    #[test]
    fn none_sentinel_means_default() {
        assert!(LanguageKey::new("de", Some("none")).is_language_default());
        assert!(LanguageKey::new("de", Some("NONE")).is_language_default());
        assert!(LanguageKey::new("de", Some("")).is_language_default());
        assert!(LanguageKey::new("de", None).is_language_default());
    }

    #[test]
    fn display_joins_with_underscore() {
        assert_eq!(LanguageKey::new("pt", Some("br")).to_string(), "pt_BR");
        assert_eq!(LanguageKey::language_only("pt").to_string(), "pt");
    }

    #[test]
    fn language_default_drops_country() {
        let key = LanguageKey::new("en", Some("GB"));
        assert_eq!(key.language_default(), LanguageKey::language_only("en"));
    }

    #[test]
    fn parse_accepts_common_forms() {
        assert_eq!(
            "en_US".parse::<LanguageKey>().unwrap(),
            LanguageKey::new("en", Some("US"))
        );
        assert_eq!(
            "en-us".parse::<LanguageKey>().unwrap(),
            LanguageKey::new("en", Some("US"))
        );
        assert_eq!(
            "de_none".parse::<LanguageKey>().unwrap(),
            LanguageKey::language_only("de")
        );
        assert_eq!(
            "fr".parse::<LanguageKey>().unwrap(),
            LanguageKey::language_only("fr")
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<LanguageKey>().is_err());
        assert!("_US".parse::<LanguageKey>().is_err());
        assert!("e1".parse::<LanguageKey>().is_err());
        assert!("en_U S".parse::<LanguageKey>().is_err());
    }
}
