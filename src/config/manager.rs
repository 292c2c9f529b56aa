//! 設定管理を行うモジュール

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

/// 検証済みの設定を保持する
///
/// 保持している設定は常に [`I18nSettings::validate`] を通過している。
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: I18nSettings,
}

impl ConfigManager {
    /// デフォルト設定で作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: I18nSettings::default() }
    }

    /// `.site-i18n.json` を読み込んで検証する
    ///
    /// `workspace_root` が `None` またはファイルが無い場合はデフォルト設定。
    /// 検証に失敗した場合、現在の設定は変更しない。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<&Path>) -> Result<(), ConfigError> {
        tracing::debug!(?workspace_root, "Loading settings");

        let settings = match workspace_root {
            Some(root) => loader::load_from_workspace(root)?.unwrap_or_default(),
            None => I18nSettings::default(),
        };

        self.update_settings(settings)
    }

    /// 設定を差し替える（CLI 引数による上書き用）
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: I18nSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!(settings = ?new_settings, "Settings applied");
        self.current_settings = new_settings;

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }
}
