//! Per-string localized content.
//!
//! A [`LocalizedContent`] holds at most one value per [`LanguageCode`]. The
//! mapping may be partial; resolving a code with no entry yields
//! [`MissingLocalization`] and never another language's value. Choosing a
//! fallback is left to the caller.

use serde::{Deserialize, Serialize};

use crate::lang::LanguageCode;

/// Build a [`LocalizedContent`] inline.
///
/// ```
/// use ui::content::LocalizedContent;
/// use ui::lang::LanguageCode;
/// use ui::localized;
///
/// let about: LocalizedContent = localized! { en: "About", ja: "サークルニツイテ" };
/// assert_eq!(about.resolve(LanguageCode::Ja).map(String::as_str), Ok("サークルニツイテ"));
/// assert!(about.resolve(LanguageCode::Es).is_err());
/// ```
///
/// Keys are the builder methods on `LocalizedContent`, so an unsupported code
/// does not compile.
#[macro_export]
macro_rules! localized {
    ($( $code:ident : $value:expr ),* $(,)?) => {
        $crate::content::LocalizedContent::new() $( .$code($value) )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no `{code}` localization")]
pub struct MissingLocalization {
    pub code: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedContent<T = String> {
    #[serde(skip_serializing_if = "Option::is_none")]
    en: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ja: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    es: Option<T>,
}

impl<T> Default for LocalizedContent<T> {
    fn default() -> Self {
        Self {
            en: None,
            ja: None,
            es: None,
        }
    }
}

impl<T> LocalizedContent<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn en(mut self, value: impl Into<T>) -> Self {
        self.en = Some(value.into());
        self
    }

    pub fn ja(mut self, value: impl Into<T>) -> Self {
        self.ja = Some(value.into());
        self
    }

    pub fn es(mut self, value: impl Into<T>) -> Self {
        self.es = Some(value.into());
        self
    }

    fn slot(&self, code: LanguageCode) -> &Option<T> {
        match code {
            LanguageCode::En => &self.en,
            LanguageCode::Ja => &self.ja,
            LanguageCode::Es => &self.es,
        }
    }

    fn slot_mut(&mut self, code: LanguageCode) -> &mut Option<T> {
        match code {
            LanguageCode::En => &mut self.en,
            LanguageCode::Ja => &mut self.ja,
            LanguageCode::Es => &mut self.es,
        }
    }

    /// Store `value` for `code`, returning the value it replaced.
    pub fn insert(&mut self, code: LanguageCode, value: T) -> Option<T> {
        self.slot_mut(code).replace(value)
    }

    pub fn get(&self, code: LanguageCode) -> Option<&T> {
        self.slot(code).as_ref()
    }

    pub fn resolve(&self, code: LanguageCode) -> Result<&T, MissingLocalization> {
        self.get(code).ok_or(MissingLocalization { code })
    }

    pub fn contains(&self, code: LanguageCode) -> bool {
        self.slot(code).is_some()
    }

    /// Codes with an entry, in [`LanguageCode::ALL`] order.
    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        LanguageCode::ALL
            .into_iter()
            .filter(move |code| self.contains(*code))
    }

    /// Codes without an entry, in [`LanguageCode::ALL`] order.
    pub fn missing(&self) -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|code| !self.contains(*code))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.languages().next().is_none()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> LocalizedContent<U> {
        LocalizedContent {
            en: self.en.map(&mut f),
            ja: self.ja.map(&mut f),
            es: self.es.map(&mut f),
        }
    }
}

impl<T> FromIterator<(LanguageCode, T)> for LocalizedContent<T> {
    fn from_iter<I: IntoIterator<Item = (LanguageCode, T)>>(iter: I) -> Self {
        let mut content = Self::new();
        for (code, value) in iter {
            content.insert(code, value);
        }
        content
    }
}

/// Look up `content` for `code`.
pub fn resolve<T>(
    content: &LocalizedContent<T>,
    code: LanguageCode,
) -> Result<&T, MissingLocalization> {
    content.resolve(code)
}
