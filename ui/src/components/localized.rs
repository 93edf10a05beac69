use tracing::debug;

use crate::content::LocalizedContent;
use crate::lang::LanguageCode;

/// Render-time fallback: the active language, then English, then nothing.
pub fn text_or_fallback(content: &LocalizedContent, lang: LanguageCode) -> String {
    match content.resolve(lang) {
        Ok(text) => text.clone(),
        Err(missing) => {
            debug!(%missing, "rendering English fallback");
            content.get(LanguageCode::En).cloned().unwrap_or_default()
        }
    }
}

/// Prefer `variant` when it exists for `lang`, else fall back on `base`.
pub fn variant_or(
    variant: &LocalizedContent,
    base: &LocalizedContent,
    lang: LanguageCode,
) -> String {
    match variant.resolve(lang) {
        Ok(text) => text.clone(),
        Err(_) => text_or_fallback(base, lang),
    }
}
