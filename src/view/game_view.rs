//! Tile grid, on-screen keyboard, lives counter and message line.
//!
//! Each paint call mirrors one model change; there is no full re-render.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement};

use super::{ensure_element, flash};
use crate::model::{KEYBOARD_ROWS, LetterTracker, NUM_ROWS, TileFeedback, WORD_LENGTH};

const COLOR_CLASSES: [&str; 3] = ["green", "yellow", "gray"];

pub fn tile_id(row: usize, col: usize) -> String {
    format!("tile-{row}-{col}")
}

pub fn key_id(label: &str) -> String {
    match label {
        "←" => "key-Backspace".to_string(),
        _ => format!("key-{label}"),
    }
}

pub struct GameView {
    doc: Document,
    message: Element,
    lives: Element,
    hint_btn: Element,
    hint_text: Element,
    notice_ms: u32,
}

impl GameView {
    /// Find or create the page skeleton and build tiles and keys.
    pub fn mount(doc: &Document, notice_ms: u32) -> Result<Self, JsValue> {
        let grid = ensure_element(doc, "guessGrid", "div")?;
        let keyboard = ensure_element(doc, "keyboard", "div")?;
        let message = ensure_element(doc, "message", "div")?;
        let lives = ensure_element(doc, "lives", "div")?;
        let hint_btn = ensure_element(doc, "hintBtn", "button")?;
        let hint_text = ensure_element(doc, "hintText", "div")?;
        if hint_btn.text_content().unwrap_or_default().is_empty() {
            hint_btn.set_text_content(Some("Hint"));
        }

        grid.set_inner_html("");
        for row in 0..NUM_ROWS {
            for col in 0..WORD_LENGTH {
                let tile = doc.create_element("div")?;
                tile.set_class_name("tile");
                tile.set_id(&tile_id(row, col));
                grid.append_child(&tile)?;
            }
        }

        keyboard.set_inner_html("");
        for row in KEYBOARD_ROWS {
            let row_el = doc.create_element("div")?;
            row_el.set_class_name("key-row");
            for &label in row {
                let key = doc.create_element("button")?;
                key.set_class_name("key");
                key.set_id(&key_id(label));
                key.set_attribute("data-key", label)?;
                key.set_text_content(Some(label));
                row_el.append_child(&key)?;
            }
            keyboard.append_child(&row_el)?;
        }

        Ok(Self {
            doc: doc.clone(),
            message,
            lives,
            hint_btn,
            hint_text,
            notice_ms,
        })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.doc.get_element_by_id(id)
    }

    pub fn keyboard(&self) -> Option<Element> {
        self.element("keyboard")
    }

    pub fn hint_button(&self) -> &Element {
        &self.hint_btn
    }

    // --- Tiles -----------------------------------------------------------------

    pub fn paint_cell(&self, row: usize, col: usize, letter: Option<char>) {
        let Some(tile) = self.element(&tile_id(row, col)) else {
            return;
        };
        match letter {
            Some(ch) => {
                tile.set_text_content(Some(&ch.to_string()));
                tile.class_list().add_1("filled").ok();
            }
            None => {
                tile.set_text_content(Some(""));
                tile.class_list().remove_1("filled").ok();
            }
        }
    }

    pub fn paint_feedback(&self, row: usize, feedback: &TileFeedback) {
        for (col, color) in feedback.iter().enumerate() {
            if let Some(tile) = self.element(&tile_id(row, col)) {
                tile.class_list().add_1(color.css_class()).ok();
            }
        }
    }

    pub fn paint_tracker(&self, tracker: &LetterTracker) {
        for (letter, status) in tracker.known() {
            let Some(key) = self.element(&key_id(&letter.to_string())) else {
                continue;
            };
            let Some(class) = status.css_class() else {
                continue;
            };
            let list = key.class_list();
            for c in COLOR_CLASSES {
                if c != class {
                    list.remove_1(c).ok();
                }
            }
            list.add_1(class).ok();
        }
    }

    // --- Status line -------------------------------------------------------------

    pub fn set_lives(&self, lives: u32) {
        self.lives.set_text_content(Some(&format!("Lives: {lives}")));
    }

    pub fn set_hint_enabled(&self, enabled: bool) {
        if let Some(btn) = self.hint_btn.dyn_ref::<HtmlButtonElement>() {
            btn.set_disabled(!enabled);
        } else if enabled {
            self.hint_btn.remove_attribute("disabled").ok();
        } else {
            self.hint_btn.set_attribute("disabled", "").ok();
        }
    }

    pub fn show_hint(&self, hint: &str) {
        self.hint_text.set_text_content(Some(hint));
    }

    pub fn notice(&self, text: &str) {
        flash(&self.message, text, self.notice_ms);
    }

    /// Message that stays up until the page changes.
    pub fn announce(&self, text: &str) {
        self.message.set_text_content(Some(text));
    }

    pub fn set_input_locked(&self, locked: bool) {
        if let Some(kb) = self.keyboard() {
            if locked {
                kb.class_list().add_1("locked").ok();
            } else {
                kb.class_list().remove_1("locked").ok();
            }
        }
    }
}
