use dioxus::prelude::*;

use crate::auth::{AuthError, Credentials};
use crate::components::text_or_fallback;
use crate::context::{use_catalog, use_language, use_session};
use crate::state::UserIdentity;

/// Email/password form handed straight to the session's authenticator.
#[component]
pub fn LoginPanel(on_success: EventHandler<UserIdentity>) -> Element {
    let catalog = use_catalog();
    let lang = use_language().active();
    let session = use_session();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failure = use_signal(|| None::<AuthError>);
    let mut pending = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let session = session.clone();
        let credentials = Credentials::new(email(), password());
        pending.set(true);
        spawn(async move {
            let outcome = session.log_in(credentials).await;
            pending.set(false);
            match outcome {
                Ok(user) => {
                    failure.set(None);
                    password.set(String::new());
                    on_success.call(user);
                }
                Err(err) => failure.set(Some(err)),
            }
        });
    };

    let error_text = match failure() {
        None => String::new(),
        Some(AuthError::InvalidCredentials) => {
            text_or_fallback(&catalog.content("login-failed"), lang)
        }
        Some(AuthError::Unavailable(_)) => {
            text_or_fallback(&catalog.content("login-unavailable"), lang)
        }
    };

    rsx! {
        form { class: "login", onsubmit: onsubmit,
            label { class: "login__field",
                span { {text_or_fallback(&catalog.content("login-email"), lang)} }
                input {
                    r#type: "email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            label { class: "login__field",
                span { {text_or_fallback(&catalog.content("login-password"), lang)} }
                input {
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if !error_text.is_empty() {
                p { class: "login__error", role: "alert", "{error_text}" }
            }
            button {
                class: "button button--primary",
                r#type: "submit",
                disabled: pending(),
                {text_or_fallback(&catalog.content("login-submit"), lang)}
            }
        }
    }
}
