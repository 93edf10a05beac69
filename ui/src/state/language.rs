use tracing::info;

use crate::lang::LanguageCode;

/// The active UI language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageState {
    active: LanguageCode,
    revision: u64,
}

impl LanguageState {
    pub fn new(active: LanguageCode) -> Self {
        Self {
            active,
            revision: 0,
        }
    }

    pub fn active(&self) -> LanguageCode {
        self.active
    }

    /// Switch the active language. Returns `false` (and changes nothing) when
    /// `code` is already active.
    pub fn set_active(&mut self, code: LanguageCode) -> bool {
        if self.active == code {
            return false;
        }
        info!(from = %self.active, to = %code, "language changed");
        self.active = code;
        self.revision += 1;
        true
    }

    /// Number of effective changes since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
