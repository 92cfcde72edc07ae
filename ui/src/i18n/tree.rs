//! Bilingual translation tree and the dotted-path resolver over it.
//!
//! The dictionary is a nested object whose leaves are either a `{fr, ar}` pair
//! or a bare string shared by both languages. Lists are allowed as internal
//! nodes and are addressed with numeric segments (`about.reasons.2`).

use std::collections::BTreeMap;

use serde::Deserialize;

use super::Language;

/// A leaf holding one string per supported language. `ar` may be missing, in
/// which case French is served for both.
///
/// Any object with a string `fr` member is read as a leaf; extra members
/// (another language, a translator note) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocalizedText {
    pub fr: String,
    #[serde(default)]
    pub ar: Option<String>,
}

impl LocalizedText {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::Ar => self.ar.as_deref().unwrap_or(&self.fr),
        }
    }
}

/// Node of the translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// Language-neutral leaf (brand names, phone numbers).
    Text(String),
    Localized(LocalizedText),
    List(Vec<TranslationNode>),
    Group(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    fn child(&self, segment: &str) -> Option<&TranslationNode> {
        match self {
            Self::Group(children) => children.get(segment),
            Self::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Self::Text(_) | Self::Localized(_) => None,
        }
    }

    fn text(&self, language: Language) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Localized(entry) => Some(entry.get(language)),
            Self::List(_) | Self::Group(_) => None,
        }
    }
}

/// Root of the dictionary. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationTree {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Walk `key` one dotted segment at a time and return the leaf text for
    /// `language`.
    ///
    /// Never fails: a missing segment, an empty key, or a path that stops on a
    /// group/list instead of a leaf all return `key` unchanged.
    pub fn resolve(&self, key: &str, language: Language) -> String {
        match self.lookup(key, language) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key, lang = language.code(), "missing translation key");
                key.to_string()
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but reports a miss as `None`.
    pub fn lookup(&self, key: &str, language: Language) -> Option<&str> {
        self.node(key)?.text(language)
    }

    /// Number of items under a list node, `0` when `key` is not a list.
    pub fn list_len(&self, key: &str) -> usize {
        match self.node(key) {
            Some(TranslationNode::List(items)) => items.len(),
            _ => 0,
        }
    }

    fn node(&self, key: &str) -> Option<&TranslationNode> {
        let mut segments = key.split('.');
        let first = segments.next().filter(|s| !s.is_empty())?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Every leaf path in the tree with its node, in key order.
    pub fn leaves(&self) -> Vec<(String, &TranslationNode)> {
        let mut out = Vec::new();
        for (key, node) in &self.root {
            collect_leaves(key.clone(), node, &mut out);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_leaves<'a>(
    path: String,
    node: &'a TranslationNode,
    out: &mut Vec<(String, &'a TranslationNode)>,
) {
    match node {
        TranslationNode::Group(children) => {
            for (key, child) in children {
                collect_leaves(format!("{path}.{key}"), child, out);
            }
        }
        TranslationNode::List(items) => {
            for (i, child) in items.iter().enumerate() {
                collect_leaves(format!("{path}.{i}"), child, out);
            }
        }
        TranslationNode::Text(_) | TranslationNode::Localized(_) => out.push((path, node)),
    }
}
