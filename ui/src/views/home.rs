use dioxus::prelude::*;

use crate::components::{text_or_fallback, Splash};
use crate::context::{use_catalog, use_language};

/// A page section reachable from the navbar.
pub struct Section {
    pub id: &'static str,
    pub heading_key: &'static str,
    pub body_key: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "about",
        heading_key: "nav-about",
        body_key: "section-about-body",
    },
    Section {
        id: "announcements",
        heading_key: "nav-announcements",
        body_key: "section-announcements-body",
    },
    Section {
        id: "events",
        heading_key: "nav-events",
        body_key: "section-events-body",
    },
    Section {
        id: "officers",
        heading_key: "nav-officers",
        body_key: "section-officers-body",
    },
];

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let lang = use_language().active();

    let title = catalog.content("site-title");
    let desc = catalog.content("site-description");
    let sections: Vec<(&'static str, String, String)> = SECTIONS
        .iter()
        .map(|section| {
            (
                section.id,
                text_or_fallback(&catalog.content(section.heading_key), lang),
                text_or_fallback(&catalog.content(section.body_key), lang),
            )
        })
        .collect();

    rsx! {
        Splash { title: title, desc: desc }

        main { class: "page page-home",
            for (id, heading, body) in sections {
                section { key: "{id}", id: "{id}", class: "page-home__section",
                    h2 { "{heading}" }
                    p { "{body}" }
                }
            }
        }
    }
}
