#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::config::SiteConfig;
use ui::context::SiteProvider;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn init_logging() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[log] subscriber already installed: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("CS Club – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
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
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        SiteProvider { config: config, Router::<Route> {} }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
