//! Shared state containers read by every presentation component.
//!
//! Both containers are plain values; the Dioxus layer in [`crate::context`]
//! wraps them in signals and hands them down the tree as context, so tests
//! can construct isolated instances.

pub mod language;
pub mod session;

pub use language::LanguageState;
pub use session::{Identity, SessionState, SessionStore, UserIdentity};
