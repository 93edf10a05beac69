//! Supported UI languages.
//!
//! The set is closed: every localized string in the site is keyed by one of
//! these codes, so an unsupported language cannot reach the state containers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Ja,
    Es,
}

/// Returned when a tag names a language outside [`LanguageCode::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag `{0}`")]
pub struct UnsupportedLanguage(pub String);

impl LanguageCode {
    /// Picker order.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Ja, LanguageCode::Es];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Ja => "ja",
            LanguageCode::Es => "es",
        }
    }

    /// Name of the language in that language, for the picker.
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Ja => "日本語",
            LanguageCode::Es => "Español",
        }
    }

    /// Map a parsed identifier onto a supported code by its primary subtag.
    pub fn from_langid(id: &LanguageIdentifier) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|code| id.language.as_str() == code.code())
    }

    pub fn langid(self) -> Result<LanguageIdentifier, UnsupportedLanguage> {
        self.code()
            .parse()
            .map_err(|_| UnsupportedLanguage(self.code().to_string()))
    }
}

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    /// Accepts bare codes (`ja`) as well as full tags (`ja-JP`, `es_MX`).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let id: LanguageIdentifier = tag
            .trim()
            .parse()
            .map_err(|_| UnsupportedLanguage(tag.to_string()))?;
        Self::from_langid(&id).ok_or_else(|| UnsupportedLanguage(tag.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        assert_eq!(LanguageCode::default(), LanguageCode::En);
    }

    #[test]
    fn parses_bare_codes_and_region_tags() {
        assert_eq!("ja".parse::<LanguageCode>(), Ok(LanguageCode::Ja));
        assert_eq!("es-MX".parse::<LanguageCode>(), Ok(LanguageCode::Es));
        assert_eq!(" en-US ".parse::<LanguageCode>(), Ok(LanguageCode::En));
    }

    #[test]
    fn rejects_unsupported_tags() {
        assert_eq!(
            "fr-FR".parse::<LanguageCode>(),
            Err(UnsupportedLanguage("fr-FR".into()))
        );
        assert!("not a tag!".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&LanguageCode::Ja).unwrap();
        assert_eq!(json, "\"ja\"");
        let back: LanguageCode = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(back, LanguageCode::Es);
    }

    #[test]
    fn every_code_round_trips_through_langid() {
        for code in LanguageCode::ALL {
            let id = code.langid().unwrap();
            assert_eq!(LanguageCode::from_langid(&id), Some(code));
        }
    }
}
