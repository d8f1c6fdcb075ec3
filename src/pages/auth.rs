//! Login / signup screen.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use crate::api::{ApiClient, ApiError, LoginRequest, SERVER_ERROR, SignupRequest};
use crate::config::ClientConfig;
use crate::view::{document, input_value, navigate, on_id, set_text};

#[wasm_bindgen]
pub fn start_auth_page() -> Result<(), JsValue> {
    let config = ClientConfig::load();
    let doc = document()?;
    let api = ApiClient::new(&config);

    {
        let (doc2, api, game_page) = (doc.clone(), api.clone(), config.game_page.clone());
        bind_submit(&doc, "login-form", "login-btn", move || {
            let req = LoginRequest {
                email: input_value(&doc2, "login-email"),
                password: input_value(&doc2, "login-password"),
            };
            let (doc, api, game_page) = (doc2.clone(), api.clone(), game_page.clone());
            spawn_local(async move {
                let result = api.login(&req).await;
                report(&doc, "login-error", &game_page, result.map(|_| ()), "Login failed.");
            });
        })?;
    }
    {
        let (doc2, game_page) = (doc.clone(), config.game_page.clone());
        bind_submit(&doc, "signup-form", "signup-btn", move || {
            let req = SignupRequest {
                username: input_value(&doc2, "signup-username"),
                email: input_value(&doc2, "signup-email"),
                password: input_value(&doc2, "signup-password"),
            };
            let (doc, api, game_page) = (doc2.clone(), api.clone(), game_page.clone());
            spawn_local(async move {
                let result = api.signup(&req).await;
                report(&doc, "signup-error", &game_page, result.map(|_| ()), "Signup failed.");
            });
        })?;
    }
    Ok(())
}

/// Prefer the form's submit event; fall back to a plain button click.
fn bind_submit(
    doc: &Document,
    form_id: &str,
    button_id: &str,
    mut action: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    if doc.get_element_by_id(form_id).is_some() {
        on_id(doc, form_id, "submit", move |evt: Event| {
            evt.prevent_default();
            action();
        })
    } else {
        on_id(doc, button_id, "click", move |_evt: Event| action())
    }
}

fn report(doc: &Document, error_id: &str, next: &str, result: Result<(), ApiError>, fallback: &str) {
    match result {
        Ok(()) => navigate(next),
        Err(e @ ApiError::Server { .. }) => set_text(doc, error_id, &e.user_message(fallback)),
        Err(e) => {
            gloo_console::warn!(e.to_string());
            set_text(doc, error_id, &format!("{SERVER_ERROR}."));
        }
    }
}
