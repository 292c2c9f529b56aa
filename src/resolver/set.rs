//! The immutable per-language translation data the resolver reads.

use std::collections::HashMap;

use thiserror::Error;

use crate::input::translation::TranslationTree;
use crate::types::LanguageId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    #[error("No translations loaded for default language '{0}'")]
    MissingDefaultLanguage(LanguageId),
}

/// Translation trees keyed by language, with one designated default.
///
/// The default language's tree is stored apart from the others, so it is
/// present for as long as the set exists.
#[derive(Debug, Clone)]
pub struct TranslationSet {
    default_language: LanguageId,
    default_tree: TranslationTree,
    others: HashMap<LanguageId, TranslationTree>,
}

impl TranslationSet {
    /// Build a set from per-language trees.
    ///
    /// When a language appears more than once, later trees are merged over
    /// earlier ones.
    ///
    /// # Errors
    /// Returns [`SetError::MissingDefaultLanguage`] if no tree is given for
    /// `default_language`.
    pub fn new(
        default_language: LanguageId,
        trees: impl IntoIterator<Item = (LanguageId, TranslationTree)>,
    ) -> Result<Self, SetError> {
        let mut merged: HashMap<LanguageId, TranslationTree> = HashMap::new();
        for (language, tree) in trees {
            match merged.get_mut(&language) {
                Some(existing) => existing.merge(tree),
                None => {
                    merged.insert(language, tree);
                }
            }
        }

        let default_tree = merged
            .remove(&default_language)
            .ok_or(SetError::MissingDefaultLanguage(default_language))?;

        Ok(Self { default_language, default_tree, others: merged })
    }

    #[must_use]
    pub const fn default_language(&self) -> LanguageId {
        self.default_language
    }

    #[must_use]
    pub const fn default_tree(&self) -> &TranslationTree {
        &self.default_tree
    }

    /// The tree for `language`, if one was loaded.
    #[must_use]
    pub fn tree(&self, language: LanguageId) -> Option<&TranslationTree> {
        if language == self.default_language {
            Some(&self.default_tree)
        } else {
            self.others.get(&language)
        }
    }

    /// Loaded languages, default first, the rest in [`LanguageId`] order.
    #[must_use]
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut others: Vec<LanguageId> = self.others.keys().copied().collect();
        others.sort_unstable();
        std::iter::once(self.default_language).chain(others).collect()
    }
}
