//! Admin panel: user and word management.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlFormElement, MouseEvent};

use crate::api::{AddWordRequest, AdminUser, AdminWord, ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::view::{alert, confirm, document, input_checked, input_value, on, on_id};

#[wasm_bindgen]
pub fn start_admin_page() -> Result<(), JsValue> {
    let config = ClientConfig::load();
    let doc = document()?;
    let api = ApiClient::new(&config);

    spawn_local(reload_users(doc.clone(), api.clone()));
    spawn_local(reload_words(doc.clone(), api.clone()));

    let doc2 = doc.clone();
    on_id(&doc, "addWordForm", "submit", move |evt: Event| {
        evt.prevent_default();
        let Some(req) = AddWordRequest::new(
            &input_value(&doc2, "newWord"),
            input_checked(&doc2, "isSolution"),
        ) else {
            alert("Please enter a word!");
            return;
        };
        let (doc, api) = (doc2.clone(), api.clone());
        spawn_local(async move {
            match api.add_word(&req).await {
                Ok(ack) => {
                    alert(&ack.message.unwrap_or_else(|| format!("Added '{}'.", req.word)));
                    if let Some(form) = doc
                        .get_element_by_id("addWordForm")
                        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
                    {
                        form.reset();
                    }
                    reload_words(doc, api).await;
                }
                Err(e) => alert_failure(&e, "Failed to add word.", "Server error while adding word."),
            }
        });
    })?;
    Ok(())
}

fn alert_failure(e: &ApiError, refused: &str, transport: &str) {
    gloo_console::warn!(e.to_string());
    match e {
        ApiError::Server { .. } => alert(&e.user_message(refused)),
        _ => alert(transport),
    }
}

/// One list row: label text plus a Delete button wired to `on_delete`.
fn list_item(
    doc: &Document,
    label: &str,
    on_delete: impl FnMut(MouseEvent) + 'static,
) -> Result<web_sys::Element, JsValue> {
    let li = doc.create_element("li")?;
    li.set_text_content(Some(label));
    let del = doc.create_element("button")?;
    del.set_text_content(Some("Delete"));
    on(&del, "click", on_delete)?;
    li.append_child(&del)?;
    Ok(li)
}

// --- Users ---------------------------------------------------------------------------

pub fn user_label(u: &AdminUser) -> String {
    format!("{} ({}) ", u.username, u.email)
}

async fn reload_users(doc: Document, api: ApiClient) {
    let users = match api.admin_users().await {
        Ok(users) => users,
        Err(e) => {
            gloo_console::error!("Failed to load users:", e.to_string());
            return;
        }
    };
    let Some(list) = doc.get_element_by_id("userList") else {
        return;
    };
    list.set_inner_html("");
    for user in users {
        let (doc2, api2) = (doc.clone(), api.clone());
        let (id, name) = (user.id, user.username.clone());
        let item = list_item(&doc, &user_label(&user), move |_evt: MouseEvent| {
            if !confirm(&format!("Delete user '{name}'?")) {
                return;
            }
            let (doc, api) = (doc2.clone(), api2.clone());
            spawn_local(async move {
                match api.delete_user(id).await {
                    Ok(ack) => {
                        alert(&ack.message.unwrap_or_else(|| "User deleted.".into()));
                        reload_users(doc, api).await;
                    }
                    Err(e) => alert_failure(
                        &e,
                        "Failed to delete user.",
                        "Server error while deleting user.",
                    ),
                }
            });
        });
        match item {
            Ok(li) => {
                list.append_child(&li).ok();
            }
            Err(e) => gloo_console::error!(e),
        }
    }
}

// --- Words ---------------------------------------------------------------------------

pub fn word_label(w: &AdminWord) -> String {
    format!("{} (Solution: {}, Used: {}) ", w.word, w.is_solution, w.used)
}

async fn reload_words(doc: Document, api: ApiClient) {
    let words = match api.admin_words().await {
        Ok(words) => words,
        Err(e) => {
            gloo_console::error!("Failed to load words:", e.to_string());
            return;
        }
    };
    let Some(list) = doc.get_element_by_id("wordList") else {
        return;
    };
    list.set_inner_html("");
    for word in words {
        let (doc2, api2) = (doc.clone(), api.clone());
        let (id, text) = (word.id, word.word.clone());
        let item = list_item(&doc, &word_label(&word), move |_evt: MouseEvent| {
            if !confirm(&format!("Delete word '{text}'?")) {
                return;
            }
            let (doc, api) = (doc2.clone(), api2.clone());
            spawn_local(async move {
                match api.delete_word(id).await {
                    Ok(ack) => {
                        alert(&ack.message.unwrap_or_else(|| "Word deleted.".into()));
                        reload_words(doc, api).await;
                    }
                    Err(e) => alert_failure(
                        &e,
                        "Failed to delete word.",
                        "Server error while deleting word.",
                    ),
                }
            });
        });
        match item {
            Ok(li) => {
                list.append_child(&li).ok();
            }
            Err(e) => gloo_console::error!(e),
        }
    }
}
