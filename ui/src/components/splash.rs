use dioxus::prelude::*;

use crate::components::text_or_fallback;
use crate::content::LocalizedContent;
use crate::context::{use_catalog, use_language, use_scroll_state, use_site_config};
use crate::lang::LanguageCode;

const SPLASH_CSS: Asset = asset!("/assets/styling/splash.css");

/// Full-height hero. As the page scrolls the text drifts down at half speed,
/// the background fades out over the first 100px, and the scroll hint hides
/// once the page leaves the top third of the viewport.
#[component]
pub fn Splash(title: LocalizedContent, desc: LocalizedContent) -> Element {
    let catalog = use_catalog();
    let lang = use_language().active();
    let config = use_site_config();
    let scroll = use_scroll_state()();

    let text = |key: &str| text_or_fallback(&catalog.content(key), lang);
    let opacity = scroll.visible_opacity();
    let shift = scroll.parallax_offset;
    let repository_url = config.repository_url.clone();
    let build_tag = config.build_tag.clone();

    // Only where a translation exists; no English stand-in.
    let dev_notice = if cfg!(debug_assertions) {
        catalog
            .text("splash-dev-build", lang)
            .map(str::to_string)
            .unwrap_or_default()
    } else {
        String::new()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SPLASH_CSS }

        section { class: "splash",
            div {
                id: "matrix",
                class: "splash__matrix",
                style: "opacity: {opacity}",
            }
            div {
                id: "splash",
                class: "splash__content",
                style: "transform: translateY({shift}px)",
                if lang == LanguageCode::Ja {
                    div { class: "splash__kanji", aria_hidden: "true",
                        span { "友" }
                        span { "会" }
                    }
                }
                div { id: "title", class: "splash__title",
                    p { class: "splash__university", {text("splash-university")} }
                    div { class: "splash__headline",
                        h1 { class: "splash__glitch", {text_or_fallback(&title, lang)} }
                        span { class: "splash__bubble", {text("splash-location")} }
                    }
                    p { class: "splash__desc", {text_or_fallback(&desc, lang)} }
                }
            }
            div { class: "splash__footer",
                if scroll.near_top {
                    span { class: "splash__hint", {text("splash-scroll-hint")} }
                }
                a {
                    class: "splash__repo",
                    href: "{repository_url}",
                    target: "_blank",
                    rel: "noopener",
                    span { class: "splash__repo-label", {text("splash-star-github")} }
                    span { class: "splash__repo-tag", "{build_tag}" }
                }
            }
            if !dev_notice.is_empty() {
                span { class: "splash__dev-notice", "{dev_notice}" }
            }
        }
    }
}
