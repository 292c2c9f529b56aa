use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::LanguageId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How an empty-string leaf is treated during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum EmptyValuePolicy {
    /// Empty leaves count as missing and trigger the fallback chain.
    #[default]
    Fallback,
    /// Empty leaves are returned as-is.
    Keep,
}

impl EmptyValuePolicy {
    /// Whether `value` may be returned to the caller.
    #[must_use]
    pub const fn accepts(self, value: &str) -> bool {
        match self {
            Self::Fallback => !value.is_empty(),
            Self::Keep => true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    pub translation_files: TranslationFilesConfig,

    pub exclude_patterns: Vec<String>,

    pub key_separator: String,

    /// Language consulted when the requested one lacks a key.
    pub default_language: String,

    pub empty_value: EmptyValuePolicy,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub file_pattern: String,
}

impl I18nSettings {
    /// The configured default language.
    ///
    /// Falls back to [`LanguageId::default`] for codes that `validate` would reject.
    #[must_use]
    pub fn default_language_id(&self) -> LanguageId {
        LanguageId::from_code(&self.default_language).unwrap_or_default()
    }

    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Unsupported default language
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/{locales,messages}/**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        if LanguageId::from_code(&self.default_language).is_none() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!(
                    "Unsupported language '{}'. Use one of: {}",
                    self.default_language,
                    LanguageId::ALL.map(LanguageId::as_str).join(", ")
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/{locales,messages}/**/*.json".to_string() }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: vec!["node_modules/**".to_string()],
            key_separator: ".".to_string(),
            default_language: LanguageId::default().as_str().to_string(),
            empty_value: EmptyValuePolicy::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = I18nSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"defaultLanguage": "fr", "emptyValue": "keep"}"#;

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_language_id(), eq(LanguageId::Fr));
        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.default_language, eq("fr"));
        assert_that!(settings.empty_value, eq(EmptyValuePolicy::Keep));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.default_language_id(), eq(LanguageId::En));
        assert_that!(settings.key_separator, eq("."));
        assert_that!(settings.exclude_patterns, elements_are![eq("node_modules/**")]);
        assert_that!(
            settings.translation_files.file_pattern,
            eq("**/{locales,messages}/**/*.json")
        );
        assert_that!(settings.empty_value, eq(EmptyValuePolicy::Fallback));
    }

    #[rstest]
    fn deserialize_unknown_empty_value_policy_fails() {
        let json = r#"{"emptyValue": "blank"}"#;

        let result: std::result::Result<I18nSettings, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[rstest]
    #[case::fallback(EmptyValuePolicy::Fallback, "", false)]
    #[case::fallback_text(EmptyValuePolicy::Fallback, "Home", true)]
    #[case::keep(EmptyValuePolicy::Keep, "", true)]
    #[case::keep_text(EmptyValuePolicy::Keep, "Home", true)]
    fn empty_value_policy_accepts(
        #[case] policy: EmptyValuePolicy,
        #[case] value: &str,
        #[case] expected: bool,
    ) {
        assert_that!(policy.accepts(value), eq(expected));
    }

    #[rstest]
    fn validate_invalid_key_separator_empty() {
        let settings = I18nSettings { key_separator: String::new(), ..I18nSettings::default() };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("keySeparator")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = I18nSettings {
            exclude_patterns: vec![
                "node_modules/**".to_string(),
                "dist/**".to_string(),
                "invalid[pattern".to_string(),
            ],
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("excludePatterns[2]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("invalid[pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translation_file_pattern_empty() {
        let settings = I18nSettings {
            translation_files: TranslationFilesConfig { file_pattern: String::new() },
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.filePattern")),
                field!(ValidationError.message, contains_substring("cannot be empty"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_translation_file_pattern_invalid_glob() {
        let settings = I18nSettings {
            translation_files: TranslationFilesConfig {
                file_pattern: "**/{locales,messages/*.json".to_string(),
            },
            ..I18nSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.filePattern")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_unsupported_default_language() {
        let settings =
            I18nSettings { default_language: "de".to_string(), ..I18nSettings::default() };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("defaultLanguage")),
                field!(ValidationError.message, contains_substring("'de'")),
                field!(ValidationError.message, contains_substring("en, fr, ar"))
            ]])
        );
        assert_that!(settings.default_language_id(), eq(LanguageId::En));
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = I18nSettings {
            key_separator: String::new(),
            default_language: "xx".to_string(),
            ..I18nSettings::default()
        };

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. keySeparator"));
        assert_that!(error_message, contains_substring("cannot be empty"));
        assert_that!(error_message, contains_substring("2. defaultLanguage"));
        assert_that!(error_message, contains_substring("Unsupported language"));
    }
}
