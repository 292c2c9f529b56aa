//! Command-line interface: argument definitions and command dispatch.
//!
//! ## Commands
//!
//! - `resolve`: Resolve keys for a language through the fallback chain
//! - `missing`: List keys a language falls back on
//! - `keys`: List every key a language provides

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{
    Parser,
    Subcommand,
};
use thiserror::Error;

use crate::config::{
    ConfigError,
    ConfigManager,
    EmptyValuePolicy,
};
use crate::indexer::{
    IndexerError,
    WorkspaceIndexer,
};
use crate::input::translation::flatten_tree;
use crate::resolver::TranslationResolver;
use crate::types::LanguageId;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Workspace root holding `.site-i18n.json` and the translation files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Default language (overrides config file)
    #[arg(long)]
    pub default_language: Option<LanguageId>,

    /// How empty translations are treated (overrides config file)
    #[arg(long, value_enum)]
    pub empty_value: Option<EmptyValuePolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve keys through requested language, default language, then the key itself
    Resolve {
        /// Keys to resolve, e.g. `nav.home`
        #[arg(required = true)]
        keys: Vec<String>,

        /// Requested language (defaults to the configured default language)
        #[arg(short, long)]
        lang: Option<LanguageId>,
    },
    /// List keys of the default language that a language does not translate
    Missing {
        /// Language to check (all non-default languages when omitted)
        #[arg(short, long)]
        lang: Option<LanguageId>,
    },
    /// List every key a language provides, sorted
    Keys {
        /// Language to list (defaults to the configured default language)
        #[arg(short, long)]
        lang: Option<LanguageId>,
    },
}

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, nothing missing
/// - `Failure` (1): `missing` found untranslated keys
/// - `Error` (2): Configuration, indexing or output failed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, nothing missing.
    Success,
    /// Command completed but found missing keys.
    Failure,
    /// Command failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Indexer(#[from] IndexerError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Load the workspace named by `args` and run its command, writing results to `out`.
///
/// # Errors
/// - The configuration file is invalid
/// - The workspace cannot be indexed
/// - Writing to `out` fails
pub fn run(args: Arguments, out: &mut impl Write) -> Result<ExitStatus, CliError> {
    let Arguments { root, default_language, empty_value, command } = args;

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(root.as_path()))?;
    if default_language.is_some() || empty_value.is_some() {
        let mut settings = config_manager.get_settings().clone();
        if let Some(language) = default_language {
            settings.default_language = language.as_str().to_string();
        }
        if let Some(policy) = empty_value {
            settings.empty_value = policy;
        }
        config_manager.update_settings(settings)?;
    }

    let indexed = WorkspaceIndexer::new().index_workspace(&root, &config_manager)?;
    for warning in &indexed.warnings {
        tracing::warn!("{warning}");
    }

    let resolver = TranslationResolver::from_settings(indexed.set, config_manager.get_settings());
    let default_language = resolver.set().default_language();

    match command {
        Command::Resolve { keys, lang } => {
            let language = lang.unwrap_or(default_language);
            for key in &keys {
                writeln!(out, "{}", resolver.resolve(key, language))?;
            }
            Ok(ExitStatus::Success)
        }
        Command::Missing { lang } => {
            let reports = match lang {
                Some(language) => vec![resolver.coverage(language)],
                None => resolver.coverage_all(),
            };

            let mut status = ExitStatus::Success;
            for report in &reports {
                writeln!(
                    out,
                    "{}: {}/{} translated",
                    report.language,
                    report.translated_keys(),
                    report.total_keys
                )?;
                for key in &report.missing_keys {
                    writeln!(out, "  {key}")?;
                }
                if !report.is_complete() {
                    status = ExitStatus::Failure;
                }
            }
            Ok(status)
        }
        Command::Keys { lang } => {
            let language = lang.unwrap_or(default_language);
            if let Some(tree) = resolver.set().tree(language) {
                let mut keys: Vec<String> =
                    flatten_tree(tree, resolver.key_separator()).into_keys().collect();
                keys.sort_unstable();
                for key in keys {
                    writeln!(out, "{key}")?;
                }
            }
            Ok(ExitStatus::Success)
        }
    }
}
