//! Shared UI crate for the CS Club site: state containers, localized
//! content, scroll tracking, and the components built on them.

pub mod auth;
pub mod config;
pub mod content;
pub mod context;
pub mod i18n;
pub mod lang;
pub mod scroll;
pub mod state;
pub mod views;

pub mod components {
    // Presentation fallback policy (components/localized.rs)
    mod localized;
    pub use localized::{text_or_fallback, variant_or};

    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod language_select;
    pub use language_select::LanguageSelect;

    mod login;
    pub use login::LoginPanel;

    mod splash;
    pub use splash::Splash;
}

use dioxus::prelude::*;

/// Shared theme; launchers link it (web) or inline the file (desktop).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
