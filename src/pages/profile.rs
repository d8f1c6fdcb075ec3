//! Profile screen: account details, logout, password change, deletion.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, MouseEvent};

use crate::api::{ApiClient, ChangePasswordRequest, MeResponse};
use crate::config::ClientConfig;
use crate::view::{alert, confirm, document, input_value, navigate, on, on_id, set_text, win};

#[wasm_bindgen]
pub fn start_profile_page() -> Result<(), JsValue> {
    let config = ClientConfig::load();
    let doc = document()?;
    let api = ApiClient::new(&config);

    {
        let (doc, api, config) = (doc.clone(), api.clone(), config.clone());
        spawn_local(async move {
            match api.me().await {
                Ok(me) => {
                    if let Err(e) = show_user(&doc, &me, &config.admin_page) {
                        gloo_console::error!("profile render failed:", e);
                    }
                }
                Err(e) => {
                    gloo_console::warn!("profile fetch failed:", e.to_string());
                    alert(&e.user_message("Failed to fetch user info."));
                    navigate(&config.index_page);
                }
            }
        });
    }

    {
        let (api, index) = (api.clone(), config.index_page.clone());
        on_id(&doc, "logoutBtn", "click", move |_evt: MouseEvent| {
            let (api, index) = (api.clone(), index.clone());
            spawn_local(async move {
                match api.logout().await {
                    Ok(_) => navigate(&index),
                    Err(e) => {
                        gloo_console::error!("logout failed:", e.to_string());
                        alert("Logout failed.");
                    }
                }
            });
        })?;
    }

    {
        let (api, index) = (api.clone(), config.index_page.clone());
        on_id(&doc, "deleteBtn", "click", move |_evt: MouseEvent| {
            if !confirm("Are you sure you want to delete your account? This cannot be undone.") {
                return;
            }
            let (api, index) = (api.clone(), index.clone());
            spawn_local(async move {
                match api.delete_account().await {
                    Ok(_) => {
                        alert("Your account has been deleted.");
                        navigate(&index);
                    }
                    Err(e) => alert(&e.user_message("Failed to delete account.")),
                }
            });
        })?;
    }

    on_id(&doc, "backBtn", "click", |_evt: MouseEvent| {
        if let Ok(history) = win().and_then(|w| w.history()) {
            history.back().ok();
        }
    })?;

    {
        let doc2 = doc.clone();
        on_id(&doc, "changePasswordForm", "submit", move |evt: Event| {
            evt.prevent_default();
            let req = ChangePasswordRequest {
                current_password: input_value(&doc2, "currentPassword"),
                new_password: input_value(&doc2, "newPassword"),
            };
            let (doc, api) = (doc2.clone(), api.clone());
            spawn_local(async move {
                let (text, color) = match api.change_password(&req).await {
                    Ok(ack) => {
                        if let Some(form) = doc
                            .get_element_by_id("changePasswordForm")
                            .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
                        {
                            form.reset();
                        }
                        (
                            ack.message.unwrap_or_else(|| "Password changed.".to_string()),
                            "green",
                        )
                    }
                    Err(e) => (e.user_message("Failed to change password."), "red"),
                };
                paint_password_msg(&doc, &text, color);
            });
        })?;
    }
    Ok(())
}

fn show_user(doc: &Document, me: &MeResponse, admin_page: &str) -> Result<(), JsValue> {
    set_text(doc, "username", &me.username);
    set_text(doc, "email", &me.email);
    if !me.is_admin {
        return Ok(());
    }
    let Some(card) = doc.query_selector(".card")? else {
        return Ok(());
    };
    let btn = doc.create_element("button")?;
    btn.set_text_content(Some("🔧 Admin Panel"));
    let admin_page = admin_page.to_string();
    on(&btn, "click", move |_evt: MouseEvent| navigate(&admin_page))?;
    card.append_child(&btn)?;
    Ok(())
}

fn paint_password_msg(doc: &Document, text: &str, color: &str) {
    if let Some(el) = doc
        .get_element_by_id("passwordMsg")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        el.set_text_content(Some(text));
        el.style().set_property("color", color).ok();
    }
}
