//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use serde_json::Value;

use crate::input::translation::TranslationTree;
use crate::resolver::TranslationSet;
use crate::types::LanguageId;

/// JSON からテスト用の TranslationTree を作成する
pub(crate) fn tree(json: &Value) -> TranslationTree {
    TranslationTree::from_json(json).unwrap()
}

/// テスト用の TranslationSet を作成する
///
/// # Arguments
/// * `default_language` - フォールバック先の言語
/// * `documents` - 言語ごとの翻訳ドキュメント
pub(crate) fn create_set(
    default_language: LanguageId,
    documents: &[(LanguageId, Value)],
) -> TranslationSet {
    TranslationSet::new(
        default_language,
        documents.iter().map(|(language, json)| (*language, tree(json))),
    )
    .unwrap()
}
