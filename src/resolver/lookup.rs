//! Key lookup with the requested → default → literal key fallback chain.

use std::sync::Arc;

use super::TranslationSet;
use crate::config::{
    EmptyValuePolicy,
    I18nSettings,
};
use crate::types::LanguageId;

/// Default separator between key segments.
pub const DEFAULT_KEY_SEPARATOR: &str = ".";

/// A value found for a key, and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The translated string.
    pub value: &'a str,
    /// Language whose tree supplied `value`.
    pub language: LanguageId,
    /// Language the caller asked for.
    pub requested: LanguageId,
}

impl Resolution<'_> {
    /// True when the value came from the default language instead of the requested one.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.language != self.requested
    }
}

/// Resolves translation keys against a shared, read-only [`TranslationSet`].
///
/// Cloning is cheap and clones share the same set, so a resolver can be
/// handed to any number of threads.
#[derive(Debug, Clone)]
pub struct TranslationResolver {
    set: Arc<TranslationSet>,
    key_separator: String,
    empty_value: EmptyValuePolicy,
}

impl TranslationResolver {
    /// Resolver with `.` as key separator and empty values treated as missing.
    #[must_use]
    pub fn new(set: impl Into<Arc<TranslationSet>>) -> Self {
        Self {
            set: set.into(),
            key_separator: DEFAULT_KEY_SEPARATOR.to_string(),
            empty_value: EmptyValuePolicy::default(),
        }
    }

    /// Resolver using the separator and empty-value policy from `settings`.
    #[must_use]
    pub fn from_settings(set: impl Into<Arc<TranslationSet>>, settings: &I18nSettings) -> Self {
        Self::new(set)
            .with_key_separator(settings.key_separator.clone())
            .with_empty_value_policy(settings.empty_value)
    }

    /// Split keys on `key_separator` instead of `.`.
    #[must_use]
    pub fn with_key_separator(mut self, key_separator: impl Into<String>) -> Self {
        self.key_separator = key_separator.into();
        self
    }

    /// Replace the empty-value policy.
    #[must_use]
    pub const fn with_empty_value_policy(mut self, policy: EmptyValuePolicy) -> Self {
        self.empty_value = policy;
        self
    }

    /// The shared translation set.
    #[must_use]
    pub fn set(&self) -> &TranslationSet {
        &self.set
    }

    /// Separator between key segments.
    #[must_use]
    pub fn key_separator(&self) -> &str {
        &self.key_separator
    }

    /// How empty leaves are treated.
    #[must_use]
    pub const fn empty_value_policy(&self) -> EmptyValuePolicy {
        self.empty_value
    }

    /// Resolve `key` for `language`, never failing.
    ///
    /// Tries the requested language, then the default language, and finally
    /// returns `key` itself.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use site_i18n::input::translation::TranslationTree;
    /// use site_i18n::resolver::{TranslationResolver, TranslationSet};
    /// use site_i18n::types::LanguageId;
    ///
    /// let en = TranslationTree::from_json(&json!({ "nav": { "home": "Home", "about": "About" } })).unwrap();
    /// let fr = TranslationTree::from_json(&json!({ "nav": { "home": "Accueil" } })).unwrap();
    /// let set = TranslationSet::new(LanguageId::En, [(LanguageId::En, en), (LanguageId::Fr, fr)]).unwrap();
    /// let resolver = TranslationResolver::new(set);
    ///
    /// assert_eq!(resolver.resolve("nav.home", LanguageId::Fr), "Accueil");
    /// assert_eq!(resolver.resolve("nav.about", LanguageId::Fr), "About");
    /// assert_eq!(resolver.resolve("nav.contact", LanguageId::Fr), "nav.contact");
    /// ```
    #[must_use]
    pub fn resolve(&self, key: &str, language: LanguageId) -> String {
        self.lookup(key, language).map_or_else(|| key.to_string(), |found| found.value.to_string())
    }

    /// Like [`resolve`](Self::resolve), but reports which language answered.
    ///
    /// `None` means the caller would get the literal key back.
    #[must_use]
    pub fn lookup(&self, key: &str, language: LanguageId) -> Option<Resolution<'_>> {
        if key.is_empty() {
            return None;
        }

        let segments = self.segments(key);
        if let Some(value) = self.lookup_in(&segments, language) {
            return Some(Resolution { value, language, requested: language });
        }

        let default_language = self.set.default_language();
        if language == default_language {
            tracing::trace!(key, %language, "Translation not found");
            return None;
        }

        let found = self.lookup_in(&segments, default_language);
        if found.is_some() {
            tracing::trace!(key, %language, %default_language, "Using default language value");
        } else {
            tracing::trace!(key, %language, %default_language, "Translation not found");
        }
        found.map(|value| Resolution { value, language: default_language, requested: language })
    }

    /// Look `key` up in `language`'s own tree only, without falling back.
    #[must_use]
    pub fn resolve_in(&self, key: &str, language: LanguageId) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.lookup_in(&self.segments(key), language)
    }

    /// Split a key into segments. An empty separator keeps the key whole.
    pub(super) fn segments<'k>(&self, key: &'k str) -> Vec<&'k str> {
        if self.key_separator.is_empty() {
            vec![key]
        } else {
            key.split(self.key_separator.as_str()).collect()
        }
    }

    /// Look `segments` up in one language's tree only, applying the empty-value policy.
    pub(super) fn lookup_in(&self, segments: &[&str], language: LanguageId) -> Option<&str> {
        let value = self.set.tree(language)?.get(segments)?;
        self.empty_value.accepts(value).then_some(value)
    }
}
