//! site-i18n
//!
//! Web サイト向けの翻訳リゾルバー。キーを要求言語、既定言語、キーそのものの順に解決する。

pub mod cli;
pub mod config;
pub mod indexer;
pub mod input;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use resolver::{
    TranslationResolver,
    TranslationSet,
};
pub use types::LanguageId;
