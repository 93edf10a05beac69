//! Build-time site configuration.
//!
//! Values come from environment variables read when the crate is compiled
//! (the launchers ship as static bundles, so there is no runtime environment
//! to consult):
//!
//! - `CSCLUB_DEFAULT_LANGUAGE`: language active at startup (`en`, `ja`, `es`; default `en`)
//! - `CSCLUB_DEMO_ACCOUNTS`: `email:password` pairs separated by `,` for the
//!   in-memory authenticator

use tracing::warn;

use crate::auth::MemoryAuthenticator;
use crate::lang::LanguageCode;

pub const REPOSITORY_URL: &str = "https://github.com/TheSwiginator/CS-Club-Website";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub default_language: LanguageCode,
    pub demo_accounts: Vec<(String, String)>,
    pub repository_url: String,
    /// Shown next to the repository link, e.g. `patch_1.3.2`.
    pub build_tag: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::default(),
            demo_accounts: Vec::new(),
            repository_url: REPOSITORY_URL.to_string(),
            build_tag: format!("patch_{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::parse(
            option_env!("CSCLUB_DEFAULT_LANGUAGE"),
            option_env!("CSCLUB_DEMO_ACCOUNTS"),
        )
    }

    pub fn parse(default_language: Option<&str>, demo_accounts: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = default_language.filter(|raw| !raw.trim().is_empty()) {
            match raw.parse() {
                Ok(code) => config.default_language = code,
                Err(err) => warn!(%err, "CSCLUB_DEFAULT_LANGUAGE ignored"),
            }
        }

        for entry in demo_accounts.unwrap_or_default().split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.split_once(':') {
                Some((email, password)) if !email.trim().is_empty() && !password.is_empty() => {
                    config
                        .demo_accounts
                        .push((email.trim().to_string(), password.to_string()));
                }
                _ => warn!(entry, "CSCLUB_DEMO_ACCOUNTS entry is not `email:password`"),
            }
        }

        config
    }

    pub fn authenticator(&self) -> MemoryAuthenticator {
        self.demo_accounts
            .iter()
            .fold(MemoryAuthenticator::new(), |auth, (email, password)| {
                auth.with_account(email, password)
            })
    }
}
