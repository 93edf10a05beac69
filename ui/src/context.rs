//! Dioxus glue: shared state as context, plus the browser scroll source.
//!
//! Mount [`SiteProvider`] once near the root; components below it reach the
//! catalog, language and session through the `use_*` hooks.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error};
use uuid::Uuid;

use crate::auth::{AuthError, Authenticator, Credentials};
use crate::config::SiteConfig;
use crate::i18n::Catalog;
use crate::lang::LanguageCode;
use crate::scroll::{ScrollSample, ScrollSource, ScrollState, ScrollSubscription, ScrollTracker};
use crate::state::session::{self, SessionStore};
use crate::state::{Identity, LanguageState, SessionState, UserIdentity};

/// Handle to the shared [`LanguageState`].
#[derive(Clone, Copy, PartialEq)]
pub struct Language(Signal<LanguageState>);

impl Language {
    /// Read (and subscribe to) the active language.
    pub fn active(&self) -> LanguageCode {
        self.0.read().active()
    }

    /// Switch language. Re-selecting the active one notifies nobody.
    pub fn set(&mut self, code: LanguageCode) {
        if self.0.peek().active() != code {
            self.0.write().set_active(code);
        }
    }
}

/// Handle to the shared [`SessionState`] and its authenticator.
#[derive(Clone)]
pub struct Session {
    state: Signal<SessionState>,
    auth: Rc<dyn Authenticator>,
}

impl SessionStore for Signal<SessionState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.write())
    }
}

impl Session {
    pub fn current_user(&self) -> Identity {
        self.state.read().current_user().clone()
    }

    pub fn user(&self) -> Option<UserIdentity> {
        self.state.read().user().cloned()
    }

    pub async fn log_in(&self, credentials: Credentials) -> Result<UserIdentity, AuthError> {
        let mut state = self.state;
        session::log_in(&mut state, self.auth.as_ref(), &credentials).await
    }

    pub async fn log_out(&self) {
        let mut state = self.state;
        session::log_out(&mut state, self.auth.as_ref()).await
    }
}

#[component]
pub fn SiteProvider(config: SiteConfig, children: Element) -> Element {
    let catalog = use_hook(|| {
        Rc::new(Catalog::load().unwrap_or_else(|err| {
            error!(error = %err, "site catalog failed to load; rendering without copy");
            Catalog::default()
        }))
    });
    use_context_provider(|| catalog);

    let default_language = config.default_language;
    let language = use_signal(|| LanguageState::new(default_language));
    use_context_provider(|| Language(language));

    let state = use_signal(SessionState::new);
    let auth_config = config.clone();
    use_context_provider(move || Session {
        state,
        auth: Rc::new(auth_config.authenticator()) as Rc<dyn Authenticator>,
    });

    use_context_provider(|| Rc::new(config));

    rsx! { {children} }
}

pub fn use_catalog() -> Rc<Catalog> {
    use_context::<Rc<Catalog>>()
}

pub fn use_language() -> Language {
    use_context::<Language>()
}

pub fn use_session() -> Session {
    use_context::<Session>()
}

pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>()
}

/// Registers a window scroll listener through `document::eval`. Samples are
/// coalesced to one per animation frame before they cross into Rust.
const LISTEN_JS: &str = r#"
const key = "__KEY__";
window.__csclubScroll = window.__csclubScroll || {};
let pending = false;
const report = () => {
    pending = false;
    dioxus.send({ offset: window.pageYOffset, viewport_height: window.innerHeight });
};
const onScroll = () => {
    if (!pending) {
        pending = true;
        window.requestAnimationFrame(report);
    }
};
window.__csclubScroll[key] = onScroll;
window.addEventListener("scroll", onScroll, { passive: true });
report();
"#;

const UNLISTEN_JS: &str = r#"
const key = "__KEY__";
const registry = window.__csclubScroll || {};
if (registry[key]) {
    window.removeEventListener("scroll", registry[key]);
    delete registry[key];
}
"#;

/// The host window's scroll position.
pub struct WindowScroll;

pub struct WindowScrollHandle {
    key: String,
    task: Task,
}

impl ScrollSource for WindowScroll {
    type Handle = WindowScrollHandle;

    fn listen(&self, mut on_scroll: Box<dyn FnMut(ScrollSample)>) -> WindowScrollHandle {
        let key = Uuid::new_v4().simple().to_string();
        let script = LISTEN_JS.replace("__KEY__", &key);
        let task = spawn(async move {
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<ScrollSample>().await {
                    Ok(sample) => on_scroll(sample),
                    Err(err) => {
                        debug!(?err, "scroll listener closed");
                        break;
                    }
                }
            }
        });
        WindowScrollHandle { key, task }
    }

    fn unlisten(&self, handle: WindowScrollHandle) {
        handle.task.cancel();
        let _ = document::eval(&UNLISTEN_JS.replace("__KEY__", &handle.key));
    }
}

/// Window scroll state for the calling view. The listener is attached on
/// first render and released when the view unmounts.
pub fn use_scroll_state() -> ReadOnlySignal<ScrollState> {
    let state = use_signal(ScrollState::initial);
    let subscription = use_hook(move || {
        let mut state = state;
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
        let subscription =
            ScrollSubscription::attach(WindowScroll, tracker, move |next| state.set(next));
        Rc::new(RefCell::new(Some(subscription)))
    });
    use_drop(move || {
        subscription.borrow_mut().take();
    });
    state.into()
}
