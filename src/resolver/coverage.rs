//! Which keys a language answers from its own tree and which fall back.

use super::TranslationResolver;
use crate::input::translation::join_key;
use crate::types::LanguageId;

/// Translation coverage of one language against the default language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub language: LanguageId,
    /// Number of reachable leaf keys in the default language's tree.
    pub total_keys: usize,
    /// Keys this language cannot answer itself, sorted.
    pub missing_keys: Vec<String>,
}

impl CoverageReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_keys.is_empty()
    }

    /// Keys answered from the language's own tree.
    #[must_use]
    pub fn translated_keys(&self) -> usize {
        self.total_keys.saturating_sub(self.missing_keys.len())
    }
}

impl TranslationResolver {
    /// Keys of the default tree that `language` does not provide a usable
    /// value for in its own tree.
    ///
    /// For the default language itself this lists the leaves the
    /// empty-value policy rejects. Leaves no key can reach under the current
    /// separator are not reported.
    #[must_use]
    pub fn missing_keys(&self, language: LanguageId) -> Vec<String> {
        let separator = self.key_separator();
        let mut missing: Vec<String> = self
            .set()
            .default_tree()
            .leaves()
            .into_iter()
            .filter(|(path, _)| self.lookup_in(path, language).is_none())
            .filter_map(|(path, _)| join_key(&path, separator))
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Coverage for one language.
    #[must_use]
    pub fn coverage(&self, language: LanguageId) -> CoverageReport {
        CoverageReport {
            language,
            total_keys: self
                .set()
                .default_tree()
                .leaves()
                .iter()
                .filter(|(path, _)| join_key(path, self.key_separator()).is_some())
                .count(),
            missing_keys: self.missing_keys(language),
        }
    }

    /// Coverage for every supported language except the default.
    #[must_use]
    pub fn coverage_all(&self) -> Vec<CoverageReport> {
        let default_language = self.set().default_language();
        LanguageId::ALL
            .into_iter()
            .filter(|language| *language != default_language)
            .map(|language| self.coverage(language))
            .collect()
    }
}
