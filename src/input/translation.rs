//! Translation file input definitions

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;
use thiserror::Error;

use crate::types::LanguageId;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to read translation file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Translation document root must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("No supported language code found in path {0:?}")]
    UnknownLanguage(PathBuf),
}

/// One language's localized strings, organized hierarchically.
///
/// Immutable once loaded; lookups only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationTree {
    Leaf(String),
    Node(HashMap<String, TranslationTree>),
}

impl Default for TranslationTree {
    fn default() -> Self {
        Self::Node(HashMap::new())
    }
}

impl TranslationTree {
    /// Build a tree from a parsed translation document.
    ///
    /// Objects become nodes and strings become leaves. Numbers and booleans
    /// are kept as leaves holding their JSON text, arrays become nodes keyed
    /// by index (`"0"`, `"1"`, ...), and `null` members are dropped.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use site_i18n::input::translation::TranslationTree;
    ///
    /// let tree = TranslationTree::from_json(&json!({
    ///     "nav": { "home": "Home" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(tree.get(&["nav", "home"]), Some("Home"));
    /// assert_eq!(tree.get(&["nav"]), None);
    /// ```
    ///
    /// # Errors
    /// Returns [`TranslationError::NotAnObject`] when the root is not an object.
    pub fn from_json(json: &Value) -> Result<Self, TranslationError> {
        match json {
            Value::Object(_) => Ok(Self::from_value(json).unwrap_or_default()),
            other => Err(TranslationError::NotAnObject { found: json_kind(other) }),
        }
    }

    /// Converts one JSON value, or `None` for `null`.
    fn from_value(json: &Value) -> Option<Self> {
        match json {
            Value::Null => None,
            Value::String(s) => Some(Self::Leaf(s.clone())),
            Value::Bool(_) | Value::Number(_) => Some(Self::Leaf(json.to_string())),
            Value::Array(arr) => Some(Self::Node(
                arr.iter()
                    .enumerate()
                    .filter_map(|(index, value)| {
                        Self::from_value(value).map(|tree| (index.to_string(), tree))
                    })
                    .collect(),
            )),
            Value::Object(map) => Some(Self::Node(
                map.iter()
                    .filter_map(|(key, value)| {
                        Self::from_value(value).map(|tree| (key.clone(), tree))
                    })
                    .collect(),
            )),
        }
    }

    /// Descend one segment at a time.
    ///
    /// Stops with `None` as soon as a segment is absent or the walk reaches a
    /// leaf with segments still left.
    #[must_use]
    pub fn walk(&self, segments: &[&str]) -> Option<&Self> {
        segments.iter().try_fold(self, |node, segment| match node {
            Self::Node(children) => children.get(*segment),
            Self::Leaf(_) => None,
        })
    }

    /// The leaf string at `segments`, if the path ends on a leaf.
    #[must_use]
    pub fn get(&self, segments: &[&str]) -> Option<&str> {
        match self.walk(segments)? {
            Self::Leaf(value) => Some(value.as_str()),
            Self::Node(_) => None,
        }
    }

    /// Deep-merge `other` into `self`. Leaves from `other` win.
    pub fn merge(&mut self, other: Self) {
        match (self, other) {
            (Self::Node(ours), Self::Node(theirs)) => {
                for (key, value) in theirs {
                    match ours.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            ours.insert(key, value);
                        }
                    }
                }
            }
            (this, other) => *this = other,
        }
    }

    /// Every leaf as its segment path plus value.
    #[must_use]
    pub fn leaves(&self) -> Vec<(Vec<&str>, &str)> {
        let mut result = Vec::new();
        collect_leaves(self, &mut Vec::new(), &mut result);
        result
    }
}

fn collect_leaves<'a>(
    tree: &'a TranslationTree,
    path: &mut Vec<&'a str>,
    result: &mut Vec<(Vec<&'a str>, &'a str)>,
) {
    match tree {
        TranslationTree::Leaf(value) => result.push((path.clone(), value.as_str())),
        TranslationTree::Node(children) => {
            for (key, child) in children {
                path.push(key.as_str());
                collect_leaves(child, path, result);
                path.pop();
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Flatten a tree into a separator-joined key map.
///
/// Leaves whose joined key would not split back into the same segments
/// (see [`join_key`]) are left out.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use site_i18n::input::translation::{flatten_tree, TranslationTree};
///
/// let tree = TranslationTree::from_json(&json!({
///     "footer": {
///         "rights": "All rights reserved",
///         "contact": "Contact us"
///     }
/// }))
/// .unwrap();
///
/// let flattened = flatten_tree(&tree, ".");
/// assert_eq!(flattened.get("footer.rights"), Some(&"All rights reserved".to_string()));
/// assert_eq!(flattened.get("footer.contact"), Some(&"Contact us".to_string()));
/// ```
#[must_use]
pub fn flatten_tree(tree: &TranslationTree, separator: &str) -> HashMap<String, String> {
    tree.leaves()
        .into_iter()
        .filter_map(|(path, value)| Some((join_key(&path, separator)?, value.to_string())))
        .collect()
}

/// Join leaf segments into a key that a lookup with `separator` can reach.
///
/// `None` when a segment contains the separator, when an empty separator
/// meets more than one segment, or when the key would be empty.
#[must_use]
pub fn join_key(segments: &[&str], separator: &str) -> Option<String> {
    let reachable = if separator.is_empty() {
        segments.len() == 1
    } else {
        segments.iter().all(|segment| !segment.contains(separator))
    };
    let key = segments.join(separator);

    (reachable && !key.is_empty()).then_some(key)
}

/// Detect language from file path heuristically
///
/// Splits the path by '/' and '.', then searches backwards for a part
/// that names a supported language.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `messages/fr-FR.json` → `fr`
/// - `locales/ar/site.json` → `ar`
#[must_use]
pub fn detect_language_from_path(file_path: &Path) -> Option<LanguageId> {
    let path_str = file_path.to_string_lossy();
    let parts: Vec<&str> = path_str.split(&['/', '\\', '.']).collect();

    parts.iter().rev().find_map(|part| LanguageId::from_code(part))
}

/// A parsed translation document and the language it belongs to.
#[derive(Debug, Clone)]
pub struct TranslationFile {
    pub path: PathBuf,
    pub language: LanguageId,
    pub tree: TranslationTree,
}

/// Load a translation file.
///
/// The language is detected from the part of `file_path` below
/// `workspace_root`, so directories above the workspace never name it.
///
/// # Errors
/// Returns error if the file cannot be read, is not a JSON object, or its
/// path names no supported language.
pub fn load_translation_file(
    workspace_root: &Path,
    file_path: &Path,
) -> Result<TranslationFile, TranslationError> {
    let relative_path = file_path.strip_prefix(workspace_root).unwrap_or(file_path);
    let language = detect_language_from_path(relative_path)
        .ok_or_else(|| TranslationError::UnknownLanguage(file_path.to_path_buf()))?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| TranslationError::Read { path: file_path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| TranslationError::Parse { path: file_path.to_path_buf(), source })?;

    let tree = TranslationTree::from_json(&json)?;
    tracing::debug!(path = %file_path.display(), %language, "Loaded translation file");

    Ok(TranslationFile { path: file_path.to_path_buf(), language, tree })
}
