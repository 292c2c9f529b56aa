//! Core types used throughout the project.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A language the site ships translations for.
///
/// The set is fixed at compile time. [`LanguageId::En`] is the default
/// fallback unless the configuration names another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LanguageId {
    /// English
    #[default]
    En,
    /// French
    Fr,
    /// Arabic
    Ar,
}

/// Returned when a code names no supported language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code '{0}'. Supported: en, fr, ar")]
pub struct UnknownLanguage(pub String);

impl LanguageId {
    /// Every supported language, default first.
    pub const ALL: [Self; 3] = [Self::En, Self::Fr, Self::Ar];

    /// Canonical lowercase code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Parses a language code, case-insensitively.
    ///
    /// A region subtag separated by `-` or `_` is accepted and ignored
    /// (`en-US`, `fr_CA`). Anything after the separator that does not look
    /// like a region (2 letters or 3 digits) is rejected, so `en-trans` is
    /// not treated as English.
    ///
    /// # Examples
    /// ```
    /// use site_i18n::types::LanguageId;
    ///
    /// assert_eq!(LanguageId::from_code("FR"), Some(LanguageId::Fr));
    /// assert_eq!(LanguageId::from_code("en-US"), Some(LanguageId::En));
    /// assert_eq!(LanguageId::from_code("de"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let (primary, region) = match code.split_once(['-', '_']) {
            Some((primary, region)) => (primary, Some(region)),
            None => (code.as_str(), None),
        };

        if let Some(region) = region
            && !is_region_subtag(region)
        {
            return None;
        }

        Self::ALL.into_iter().find(|language| language.as_str() == primary)
    }
}

/// `us`, `ca`, `419`
fn is_region_subtag(region: &str) -> bool {
    (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
        || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()))
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageId {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::lowercase("en", Some(LanguageId::En))]
    #[case::uppercase("FR", Some(LanguageId::Fr))]
    #[case::padded(" ar ", Some(LanguageId::Ar))]
    #[case::hyphen_region("en-US", Some(LanguageId::En))]
    #[case::underscore_region("fr_CA", Some(LanguageId::Fr))]
    #[case::numeric_region("ar-001", Some(LanguageId::Ar))]
    #[case::not_a_region("en-trans", None)]
    #[case::empty_region("fr-", None)]
    #[case::unsupported("de", None)]
    #[case::empty("", None)]
    fn test_from_code(#[case] code: &str, #[case] expected: Option<LanguageId>) {
        assert_that!(LanguageId::from_code(code), eq(expected));
    }

    #[rstest]
    fn test_display_round_trips_through_from_str() {
        for language in LanguageId::ALL {
            let parsed: LanguageId = language.to_string().parse().unwrap();
            assert_that!(parsed, eq(language));
        }
    }

    #[rstest]
    fn test_from_str_error_names_code() {
        let err = "xx".parse::<LanguageId>().unwrap_err();

        assert_that!(err.to_string(), contains_substring("'xx'"));
    }

    #[rstest]
    fn test_default_is_english() {
        assert_that!(LanguageId::default(), eq(LanguageId::En));
        assert_that!(LanguageId::ALL[0], eq(LanguageId::default()));
    }
}
