//! Workspace indexing: discover translation files and build a [`TranslationSet`].

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::{
    ConfigManager,
    FileMatcher,
};
use crate::indexer::types::IndexerError;
use crate::input::translation::load_translation_file;
use crate::resolver::TranslationSet;

/// The loaded set plus what happened to each discovered file.
#[derive(Debug, Clone)]
pub struct IndexedWorkspace {
    pub set: TranslationSet,
    /// Files that contributed to `set`, in load order.
    pub files: Vec<PathBuf>,
    /// One message per file that was discovered but skipped.
    pub warnings: Vec<String>,
}

/// Builds a [`TranslationSet`] from the translation files under a workspace.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkspaceIndexer;

impl WorkspaceIndexer {
    /// 新しいインデクサーを作成
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// ワークスペースをインデックス
    ///
    /// Files are loaded in sorted path order; documents of the same language
    /// are merged, later files overriding earlier leaves. Unreadable files,
    /// invalid JSON and files with no detectable language are skipped with a
    /// warning.
    ///
    /// # Errors
    /// - The workspace root is not a directory
    /// - Invalid glob patterns in the settings
    /// - No file was loaded for the default language
    pub fn index_workspace(
        &self,
        workspace_path: &Path,
        config_manager: &ConfigManager,
    ) -> Result<IndexedWorkspace, IndexerError> {
        tracing::debug!(workspace_path = %workspace_path.display(), "Indexing workspace");

        if !workspace_path.is_dir() {
            return Err(IndexerError::InvalidPath(workspace_path.to_path_buf()));
        }

        let settings = config_manager.get_settings();
        let matcher = FileMatcher::new(workspace_path.to_path_buf(), settings)?;
        let candidates = Self::find_translation_files(&matcher);

        let mut trees = Vec::new();
        let mut files = Vec::new();
        let mut warnings = Vec::new();
        for path in candidates {
            match load_translation_file(matcher.workspace_root(), &path) {
                Ok(file) => {
                    trees.push((file.language, file.tree));
                    files.push(file.path);
                }
                Err(e) => {
                    tracing::warn!("Skipping translation file {:?}: {}", path, e);
                    warnings.push(format!("Skipped {}: {e}", path.display()));
                }
            }
        }

        let set = TranslationSet::new(settings.default_language_id(), trees)?;
        tracing::debug!(
            files = files.len(),
            skipped = warnings.len(),
            languages = ?set.languages(),
            "Workspace indexed"
        );

        Ok(IndexedWorkspace { set, files, warnings })
    }

    /// 翻訳ファイルを検索
    fn find_translation_files(matcher: &FileMatcher) -> Vec<PathBuf> {
        let mut found_files = Vec::new();

        // ignore クレートでファイルを走査
        for result in WalkBuilder::new(matcher.workspace_root())
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .follow_links(false)
            .build()
        {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(?err, "Failed to read directory entry");
                    continue;
                }
            };

            // ファイルのみを対象
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            if matcher.is_translation_file(entry.path()) {
                found_files.push(entry.path().to_path_buf());
            }
        }

        found_files.sort();
        found_files
    }
}
