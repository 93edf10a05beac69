use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::components::app_navbar::NAV_ITEMS;
use crate::i18n::{message_ids, Catalog, DOMAIN};
use crate::lang::LanguageCode;
use crate::views::SECTIONS;

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Keys intentionally authored for only some languages.
const PARTIAL_KEYS: &[&str] = &[
    "nav-login-hover",
    "nav-logout",
    "nav-logout-hover",
    "nav-welcome",
    "splash-dev-build",
];

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Extract the literal first argument of every `content("...")` / `text("...")`
/// call under `src/`.
///
/// NOTE: This will not catch keys held in constants (checked separately
/// below) or built at runtime.
fn extract_catalog_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
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
        // Skip this scanner and other test fixtures.
        if path.components().any(|c| c.as_os_str() == "tests") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        // Unit-test modules use throwaway keys.
        let content = match content.find("#[cfg(test)]") {
            Some(pos) => &content[..pos],
            None => content.as_str(),
        };

        for needle in ["content(\"", "text(\""] {
            let mut rest = content;
            while let Some(pos) = rest.find(needle) {
                let after = &rest[pos + needle.len()..];
                if let Some(end) = after.find('"') {
                    let key = &after[..end];
                    if !key.is_empty() && key.chars().all(valid_key_char) {
                        found.insert(key.to_string());
                    }
                }
                rest = after;
            }
        }
    }

    found
}

fn read_sources(i18n_root: &Path) -> BTreeMap<LanguageCode, String> {
    LanguageCode::ALL
        .into_iter()
        .map(|code| {
            let path = i18n_root.join(code.code()).join(format!("{DOMAIN}.ftl"));
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|err| panic!("Failed to read {:?}: {err}", path));
            (code, content)
        })
        .collect()
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let sources = read_sources(&crate_root.join(I18N_DIR));

    // 1. No language file defines a key twice.
    for (code, src) in &sources {
        let mut seen = HashSet::new();
        let dups: BTreeSet<_> = message_ids(src)
            .into_iter()
            .filter(|id| !seen.insert(*id))
            .collect();
        assert!(dups.is_empty(), "Duplicate keys in {code}: {dups:?}");
    }

    let catalog = Catalog::from_sources(sources.iter().map(|(code, src)| (*code, src.as_str())))
        .expect("catalog sources parse");
    assert!(!catalog.is_empty(), "No message keys parsed");

    // 2. Every key referenced from Rust exists in at least one language.
    let mut referenced = extract_catalog_keys_from_source(&crate_root.join("src"));
    referenced.extend(NAV_ITEMS.iter().map(|(key, _)| key.to_string()));
    for section in SECTIONS {
        referenced.insert(section.heading_key.to_string());
        referenced.insert(section.body_key.to_string());
    }
    let mut unknown: Vec<_> = referenced
        .iter()
        .filter(|k| catalog.get(k).is_none())
        .collect();
    unknown.sort();
    assert!(
        unknown.is_empty(),
        "Referenced catalog keys missing from every language ({}):\n{}",
        unknown.len(),
        unknown
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );

    // 3. Partial keys are exactly the allow-listed ones.
    let partial: BTreeSet<&str> = catalog.partial_keys().collect();
    let allowed: BTreeSet<&str> = PARTIAL_KEYS.iter().copied().collect();
    let mut report = String::new();
    for key in partial.difference(&allowed) {
        let missing = catalog
            .get(key)
            .map(|c| c.missing())
            .unwrap_or_default();
        report.push_str(&format!("  {key} is missing {missing:?}\n"));
    }
    for key in allowed.difference(&partial) {
        report.push_str(&format!("  {key} is allow-listed but complete or absent\n"));
    }
    assert!(report.is_empty(), "Unexpected partial localizations:\n{report}");

    // 4. Unused keys are only reported.
    let unused: Vec<_> = catalog
        .keys()
        .filter(|k| !referenced.contains(*k))
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} catalog keys unused in Rust sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}

#[test]
fn hover_variants_fall_back_outside_japanese() {
    let catalog = Catalog::load().expect("embedded catalog");
    for key in ["nav-login-hover", "nav-logout-hover"] {
        let content = catalog.content(key);
        assert!(content.contains(LanguageCode::Ja), "{key} needs a ja entry");
        assert_eq!(content.languages().count(), 1, "{key} is ja-only");
    }
}
