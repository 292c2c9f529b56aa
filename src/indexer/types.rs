//! Indexer type definitions.

use thiserror::Error;

use crate::config::MatcherError;
use crate::resolver::SetError;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Error when the workspace root cannot be walked
    #[error("Workspace root {0:?} is not a directory")]
    InvalidPath(std::path::PathBuf),
    /// Invalid translation file or exclude pattern
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    /// The default language had no translation files
    #[error("{0}. Check 'translationFiles.filePattern' and 'defaultLanguage' in .site-i18n.json")]
    Set(#[from] SetError),
}
