//! Internationalization (i18n) support for `sashop-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of the dictionary under `i18n/`)
//! - `serde_json` (parsing the dictionary into a [`TranslationTree`])
//! - `unic-langid` (parsing language tags into a [`Language`])
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   storefront.json   (single bilingual tree, leaves are {"fr", "ar"} pairs)
//! ```
//!
//! Usage in a component:
//! ```ignore
//! use crate::i18n::use_language;
//! use crate::t;
//! let lang = use_language();
//! let label = t!(lang, "sort.price");
//! ```
//!
//! The active language is never read from a global by the resolver. Components
//! obtain it from the `Signal<Language>` context installed by
//! [`use_language_provider`] and pass it to every lookup.
//!
//! To add a key: add it to `storefront.json` with both `fr` and `ar` and run
//! the tests (`dictionary_completeness` rejects leaves missing Arabic).

mod language;
mod tree;

pub use language::{Language, LanguageError, TextDirection};
pub use tree::{LocalizedText, TranslationNode, TranslationTree};

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use rust_embed::Embed;

use crate::core::{platform, storage};

/// Ergonomic translation macro.
/// Examples:
///     t!(lang, "nav.home")
///     t!(Language::Ar, "sort.price")
///
/// Expands to [`resolve_text`] so every lookup goes through the shared
/// embedded dictionary.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::resolve_text($key, $lang)
    };
}

/// File name of the dictionary inside the embedded folder.
const DICTIONARY_FILE: &str = "storefront.json";

/// Embed the dictionary folder.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Process-wide dictionary parsed on first use.
pub static DICTIONARY: Lazy<TranslationTree> = Lazy::new(load_dictionary);

fn load_dictionary() -> TranslationTree {
    let Some(file) = Localizations::get(DICTIONARY_FILE) else {
        tracing::error!(file = DICTIONARY_FILE, "embedded dictionary is missing");
        return TranslationTree::default();
    };
    let raw = String::from_utf8_lossy(&file.data);
    match TranslationTree::from_json(&raw) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::error!(%err, "failed to parse embedded dictionary; keys will render as-is");
            TranslationTree::default()
        }
    }
}

/// Resolve `key` against the embedded dictionary for `language`.
pub fn resolve_text(key: &str, language: Language) -> String {
    DICTIONARY.resolve(key, language)
}

/// Install the active-language signal for the subtree rooted at the caller.
///
/// The initial value is the persisted preference (or French), and the
/// document direction is applied once on mount.
pub fn use_language_provider() -> Signal<Language> {
    let signal = use_signal(|| storage::load_language(&storage::default_store()));
    use_context_provider(|| signal);
    use_effect(move || platform::apply_document_language(signal()));
    signal
}

/// Current language for rendering. Subscribes the calling component to changes.
pub fn use_language() -> Language {
    try_use_context::<Signal<Language>>()
        .map(|lang| lang())
        .unwrap_or_default()
}

/// Switch the active language: update the signal and persist the choice. The
/// provider's effect re-applies the document direction.
pub fn switch_language(mut signal: Signal<Language>, language: Language) {
    if signal() == language {
        return;
    }
    signal.set(language);
    let mut store = storage::default_store();
    if let Err(err) = storage::save_language(&mut store, language) {
        tracing::warn!(%err, "could not persist language preference");
    }
    tracing::info!(lang = language.code(), "language switched");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_is_embedded() {
        assert!(Localizations::get(DICTIONARY_FILE).is_some());
        assert!(!DICTIONARY.is_empty());
    }

    #[test]
    fn basic_lookup_works() {
        assert_eq!(resolve_text("sort.price", Language::Fr), "Prix");
        assert_eq!(crate::t!(Language::Ar, "sort.price"), "السعر");
    }

    #[test]
    fn unknown_key_renders_as_is() {
        assert_eq!(resolve_text("no.such.key", Language::Fr), "no.such.key");
        assert_eq!(resolve_text("no.such.key", Language::Ar), "no.such.key");
    }
}
