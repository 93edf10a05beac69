use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::config::SiteConfig;
use ui::context::SiteProvider;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[log] subscriber already installed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = SiteConfig::from_build_env();
        if config.demo_accounts.is_empty() {
            warn!("no CSCLUB_DEMO_ACCOUNTS configured; every login will be rejected");
        }
        config
    });

    rsx! {
        // Global app resources
        document::Title { "CS Club - UMass Boston" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        SiteProvider { config: config, Router::<Route> {} }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
