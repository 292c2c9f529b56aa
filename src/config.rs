//! Configuration loaded from `.site-i18n.json`.

/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Translation file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    EmptyValuePolicy,
    I18nSettings,
    TranslationFilesConfig,
    ValidationError,
};
