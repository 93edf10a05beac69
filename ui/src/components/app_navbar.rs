use dioxus::prelude::*;

use crate::components::{text_or_fallback, variant_or, LanguageSelect, LoginPanel};
use crate::context::{use_catalog, use_language, use_session};

// Navbar stylesheet
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// In-page navigation: (catalog key of the label, id of the target section).
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("nav-about", "about"),
    ("nav-announcements", "announcements"),
    ("nav-events", "events"),
    ("nav-officers", "officers"),
];

fn scroll_to_section(id: &str) {
    let Ok(target) = serde_json::to_string(id) else {
        return;
    };
    let _ = document::eval(&format!(
        "document.getElementById({target})?.scrollIntoView({{ behavior: \"smooth\" }});"
    ));
}

/// Top bar: section links, login/logout, welcome banner and language picker.
///
/// Labels are resolved on every render against the active language, so a
/// language switch anywhere in the tree re-renders the bar. Japanese login
/// labels have a kana reading shown on hover; languages without that variant
/// keep the normal label.
#[component]
pub fn AppNavbar() -> Element {
    let catalog = use_catalog();
    let lang = use_language().active();
    let session = use_session();
    let user = session.user();
    let authenticated = user.is_some();

    let mut login_revealed = use_signal(|| false);
    let mut hovering = use_signal(|| false);

    let links: Vec<(&'static str, String)> = NAV_ITEMS
        .iter()
        .map(|(key, section)| (*section, text_or_fallback(&catalog.content(key), lang)))
        .collect();

    let (base, hover) = if authenticated {
        (catalog.content("nav-logout"), catalog.content("nav-logout-hover"))
    } else {
        (catalog.content("nav-login"), catalog.content("nav-login-hover"))
    };
    let login_label = if hovering() {
        variant_or(&hover, &base, lang)
    } else {
        text_or_fallback(&base, lang)
    };
    let login_class = if authenticated {
        "navbar__login navbar__login--out"
    } else {
        "navbar__login"
    };

    let welcome = match &user {
        Some(user) => format!(
            "{} {}",
            text_or_fallback(&catalog.content("nav-welcome"), lang),
            user.email
        ),
        None => String::new(),
    };
    let welcome_class = if authenticated {
        "navbar__welcome navbar__welcome--visible"
    } else {
        "navbar__welcome"
    };

    let on_login_click = move |_: MouseEvent| {
        if authenticated {
            let session = session.clone();
            spawn(async move { session.log_out().await });
        } else {
            login_revealed.set(!login_revealed());
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                nav { class: "navbar__links",
                    for (section, label) in links {
                        button {
                            key: "{section}",
                            class: "navbar__link",
                            r#type: "button",
                            onclick: move |_| scroll_to_section(section),
                            "{label}"
                        }
                    }
                }

                div { class: "navbar__account",
                    button {
                        class: "{login_class}",
                        r#type: "button",
                        onmouseenter: move |_| hovering.set(true),
                        onmouseleave: move |_| hovering.set(false),
                        onclick: on_login_click,
                        "{login_label}"
                    }
                    if login_revealed() && !authenticated {
                        div { class: "navbar__login-panel",
                            LoginPanel { on_success: move |_| login_revealed.set(false) }
                        }
                    }
                    div { class: "{welcome_class}", "{welcome}" }
                    LanguageSelect {}
                }
            }
        }
    }
}
