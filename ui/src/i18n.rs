//! Site copy for `csclub-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (parsing + formatting of each message)
//! - [`LocalizedContent`] (one closed per-language mapping per message id)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/csclub-ui.ftl
//!   ja/csclub-ui.ftl
//!   es/csclub-ui.ftl
//! ```
//!
//! Every language file is loaded into its own bundle with no fallback chain.
//! A message missing from one file leaves that language's slot empty, so a
//! lookup reports [`MissingLocalization`] instead of quietly rendering
//! another language.
//!
//! Usage in a component:
//! ```ignore
//! let catalog = use_catalog();
//! let about = catalog.content("nav-about");
//! ```
//!
//! To add a string, add the message to each language file that has a
//! translation. Keys left out of some language on purpose must be listed in
//! the completeness test's allow-list.
use std::borrow::Cow;
use std::collections::BTreeMap;

use fluent::{FluentBundle, FluentResource};
use rust_embed::Embed;

use crate::content::{LocalizedContent, MissingLocalization};
use crate::lang::{LanguageCode, UnsupportedLanguage};

/// Fluent "domain" (the per-language FTL filename).
///
/// Path of each file: `i18n/{code}/{DOMAIN}.ftl`
pub const DOMAIN: &str = "csclub-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no embedded catalog for `{0}`")]
    MissingResource(LanguageCode),
    #[error("catalog for `{0}` is not valid UTF-8")]
    Encoding(LanguageCode),
    #[error("catalog for `{code}` has {count} syntax error(s)")]
    Parse { code: LanguageCode, count: usize },
    #[error("catalog for `{code}` defines `{key}` more than once")]
    Duplicate { code: LanguageCode, key: String },
    #[error("message `{key}` in `{code}` has no plain value")]
    NoValue { code: LanguageCode, key: String },
    #[error("message `{key}` in `{code}` failed to format: {reason}")]
    Format {
        code: LanguageCode,
        key: String,
        reason: String,
    },
    #[error(transparent)]
    Language(#[from] UnsupportedLanguage),
}

/// All site strings, keyed by message id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<String, LocalizedContent<String>>,
}

impl Catalog {
    /// Load every embedded language file.
    pub fn load() -> Result<Self, CatalogError> {
        let mut sources = Vec::with_capacity(LanguageCode::ALL.len());
        for code in LanguageCode::ALL {
            let path = format!("{}/{DOMAIN}.ftl", code.code());
            let file = Localizations::get(&path).ok_or(CatalogError::MissingResource(code))?;
            let text = match file.data {
                Cow::Borrowed(bytes) => Cow::Borrowed(
                    std::str::from_utf8(bytes).map_err(|_| CatalogError::Encoding(code))?,
                ),
                Cow::Owned(bytes) => Cow::Owned(
                    String::from_utf8(bytes).map_err(|_| CatalogError::Encoding(code))?,
                ),
            };
            sources.push((code, text));
        }
        Self::from_sources(sources.iter().map(|(code, text)| (*code, &**text)))
    }

    /// Build a catalog from FTL sources. Languages not listed have no entries.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (LanguageCode, &'a str)>,
    ) -> Result<Self, CatalogError> {
        let mut entries: BTreeMap<String, LocalizedContent<String>> = BTreeMap::new();
        for (code, source) in sources {
            for (key, text) in format_messages(code, source)? {
                entries.entry(key).or_default().insert(code, text);
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedContent<String>> {
        self.entries.get(key)
    }

    /// Content for `key`; an unknown key yields an empty mapping.
    pub fn content(&self, key: &str) -> LocalizedContent<String> {
        self.get(key).cloned().unwrap_or_default()
    }

    pub fn text(&self, key: &str, code: LanguageCode) -> Result<&str, MissingLocalization> {
        match self.get(key) {
            Some(content) => content.resolve(code).map(String::as_str),
            None => Err(MissingLocalization { code }),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keys lacking at least one language.
    pub fn partial_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, content)| !content.is_complete())
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// List embedded language folders that map onto a supported code.
pub fn available_languages() -> Vec<LanguageCode> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().and_then(|dir| dir.parse().ok()))
        .collect::<Vec<LanguageCode>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Message ids defined at the top level of an FTL source.
///
/// Terms (`-name`), comments and indented continuation/attribute lines are
/// skipped.
pub fn message_ids(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .filter_map(|line| {
            let (id, _) = line.split_once('=')?;
            let id = id.trim();
            let valid = !id.is_empty()
                && id.starts_with(|c: char| c.is_ascii_alphabetic())
                && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            valid.then_some(id)
        })
        .collect()
}

fn format_messages(
    code: LanguageCode,
    source: &str,
) -> Result<Vec<(String, String)>, CatalogError> {
    let resource = FluentResource::try_new(source.to_string())
        .map_err(|(_, errors)| CatalogError::Parse {
            code,
            count: errors.len(),
        })?;
    let ids: Vec<String> = message_ids(source).into_iter().map(str::to_string).collect();

    let mut bundle = FluentBundle::new(vec![code.langid()?]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        let key = errors
            .first()
            .map(|err| err.to_string())
            .unwrap_or_default();
        return Err(CatalogError::Duplicate { code, key });
    }

    let mut messages = Vec::with_capacity(ids.len());
    for key in ids {
        let pattern = bundle
            .get_message(&key)
            .and_then(|message| message.value())
            .ok_or_else(|| CatalogError::NoValue {
                code,
                key: key.clone(),
            })?;
        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errors).into_owned();
        if let Some(err) = errors.first() {
            return Err(CatalogError::Format {
                code,
                key,
                reason: err.to_string(),
            });
        }
        messages.push((key, text));
    }
    Ok(messages)
}
