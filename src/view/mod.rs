//! DOM helpers shared by every page.

mod game_view;

pub use game_view::{GameView, key_id, tile_id};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window, window};

pub fn win() -> Result<Window, JsValue> {
    window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    win()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Look up an element, or create a `tag` with that id appended to `<body>`.
pub fn ensure_element(doc: &Document, id: &str, tag: &str) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let el = doc.create_element(tag)?;
    el.set_id(id);
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&el)?;
    Ok(el)
}

pub fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn input_value(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

pub fn input_checked(doc: &Document, id: &str) -> bool {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.checked())
        .unwrap_or(false)
}

pub fn set_display(doc: &Document, id: &str, display: &str) {
    if let Some(el) = doc
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        el.style().set_property("display", display).ok();
    }
}

/// Show `text` in `el` and clear it after `ms`, unless something newer
/// replaced it in the meantime.
pub fn flash(el: &Element, text: &str, ms: u32) {
    el.set_text_content(Some(text));
    let el = el.clone();
    let shown = text.to_string();
    let _ = Timeout::new(ms, move || {
        if el.text_content().as_deref() == Some(shown.as_str()) {
            el.set_text_content(Some(""));
        }
    })
    .forget();
}

pub fn navigate(url: &str) {
    if let Ok(w) = win() {
        w.location().set_href(url).ok();
    }
}

pub fn navigate_after(url: &str, ms: u32) {
    let url = url.to_string();
    let _ = Timeout::new(ms, move || navigate(&url)).forget();
}

pub fn alert(text: &str) {
    if let Ok(w) = win() {
        w.alert_with_message(text).ok();
    }
}

pub fn confirm(text: &str) -> bool {
    win()
        .and_then(|w| w.confirm_with_message(text))
        .unwrap_or(false)
}

/// Attach a listener for the lifetime of the page.
pub fn on<E, F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`on`], for an element looked up by id. Missing elements are skipped.
pub fn on_id<E, F>(doc: &Document, id: &str, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    match doc.get_element_by_id(id) {
        Some(el) => on(&el, event, handler),
        None => Ok(()),
    }
}
