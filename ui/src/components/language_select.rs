use dioxus::prelude::*;
use tracing::warn;

use crate::components::text_or_fallback;
use crate::context::{use_catalog, use_language};
use crate::i18n;
use crate::lang::LanguageCode;

#[component]
pub fn LanguageSelect() -> Element {
    let catalog = use_catalog();
    let mut language = use_language();
    let lang = language.active();
    let langs = use_hook(i18n::available_languages);

    let on_change = move |evt: FormEvent| match evt.value().parse::<LanguageCode>() {
        Ok(code) => language.set(code),
        Err(err) => warn!(%err, "language picker sent an unsupported value"),
    };

    rsx! {
        if langs.len() > 1 {
            div { class: "navbar__locale",
                label {
                    class: "visually-hidden",
                    r#for: "locale-select",
                    {text_or_fallback(&catalog.content("nav-language-label"), lang)}
                }
                select {
                    id: "locale-select",
                    value: "{lang}",
                    oninput: on_change,
                    for code in langs.iter().copied() {
                        option {
                            key: "{code}",
                            value: "{code}",
                            selected: code == lang,
                            {code.native_name()}
                        }
                    }
                }
            }
        }
    }
}
