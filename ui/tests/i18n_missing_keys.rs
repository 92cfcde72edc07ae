use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ui::i18n::{Language, DICTIONARY};

/// Extract the literal key of every `t!(<lang>, "...")` call under `src/`.
///
/// Only direct literals are matched. Keys assembled at runtime (category
/// slugs, sort modes, form errors) are checked by the in-crate completeness
/// tests instead.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    stack.push(entry.path());
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut offset = 0;
        while let Some(pos) = content[offset..].find("t!(") {
            let start = offset + pos;
            offset = start + 3;
            // Skip `assert!(`, `format!(` and friends.
            let inside_ident = content[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if inside_ident {
                continue;
            }
            // The key is the first string literal inside the call.
            let rest = &content[offset..];
            let Some(close) = rest.find(')') else { break };
            let mut quoted = rest[..close].split('"');
            if let (Some(_), Some(key)) = (quoted.next(), quoted.next()) {
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn valid_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

#[test]
fn every_literal_key_resolves_in_both_languages() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);

    assert!(
        referenced.len() > 20,
        "Suspiciously few t!() keys found ({}); is the scanner broken?",
        referenced.len()
    );

    let mut missing = Vec::new();
    for key in &referenced {
        for lang in Language::ALL {
            if DICTIONARY.lookup(key, lang).is_none() {
                missing.push(format!("{key} [{lang}]"));
            }
        }
    }

    if !missing.is_empty() {
        panic!(
            "Referenced translation keys missing from i18n/storefront.json ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn sort_price_resolves_per_language() {
    assert_eq!(ui::i18n::resolve_text("sort.price", Language::Fr), "Prix");
    assert_eq!(ui::i18n::resolve_text("sort.price", Language::Ar), "السعر");
    assert_eq!(ui::i18n::resolve_text("no.such.key", Language::Fr), "no.such.key");
}
