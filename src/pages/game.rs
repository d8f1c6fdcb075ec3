//! Game screen: wires DOM events to the [`GameSession`] and the server.
//!
//! The page state lives in a thread-local so event closures can reach it.
//! Borrows are never held across an `.await`: each handler updates the
//! session, collects what has to be sent, releases the borrow and only then
//! spawns the request.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use crate::api::{ApiClient, EndGameRequest};
use crate::config::ClientConfig;
use crate::model::{GameSession, GuessEvent, KeyInput, SubmitAction};
use crate::view::{GameView, document, navigate_after, on};

struct GamePage {
    session: GameSession,
    view: GameView,
    api: ApiClient,
    config: ClientConfig,
}

thread_local! {
    static GAME: RefCell<Option<GamePage>> = const { RefCell::new(None) };
}

fn with_page<R>(f: impl FnOnce(&mut GamePage) -> R) -> Option<R> {
    GAME.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Follow-up work after a game ends, collected while the page is borrowed.
struct EndOfGame {
    report: EndGameRequest,
    api: ApiClient,
    stats_page: String,
    delay_ms: u32,
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let config = ClientConfig::load();
    let doc = document()?;
    let view = GameView::mount(&doc, config.notice_ms)?;
    let api = ApiClient::new(&config);

    // On-screen keys, delegated through the keyboard container.
    if let Some(kb) = view.keyboard() {
        on(&kb, "click", |evt: MouseEvent| {
            let key = evt
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("[data-key]").ok().flatten())
                .and_then(|el| el.get_attribute("data-key"));
            if let Some(input) = key.as_deref().and_then(KeyInput::parse) {
                handle_key(input);
            }
        })?;
    }

    // Physical keyboard.
    on(&doc, "keydown", |evt: KeyboardEvent| {
        if evt.ctrl_key() || evt.meta_key() || evt.alt_key() {
            return;
        }
        if let Some(input) = KeyInput::parse(&evt.key()) {
            evt.prevent_default();
            handle_key(input);
        }
    })?;

    on(view.hint_button(), "click", |_evt: MouseEvent| handle_hint())?;

    GAME.with(|g| {
        g.replace(Some(GamePage {
            session: GameSession::new(),
            view,
            api: api.clone(),
            config,
        }))
    });

    spawn_local(begin(api));
    Ok(())
}

// --- Start ---------------------------------------------------------------------

async fn begin(api: ApiClient) {
    let result = api.start_game().await;
    with_page(|p| {
        match result {
            Ok(started) => {
                p.session.apply_start(started.lives_left);
                p.view.set_lives(started.lives_left);
                if let Some(word) = started.word {
                    gloo_console::log!("Game started:", word);
                }
            }
            Err(e) => {
                gloo_console::warn!("start-game failed:", e.to_string());
                p.session.reject_start(e.lives_left());
                if let Some(lives) = e.lives_left() {
                    p.view.set_lives(lives);
                }
                p.view.notice(&e.user_message("Failed to start game"));
            }
        }
        p.view.set_hint_enabled(p.session.hints_enabled());
    });
}

// --- Grid input ------------------------------------------------------------------

fn handle_key(input: KeyInput) {
    let outgoing = with_page(|p| match input {
        KeyInput::Letter(ch) => {
            if let Some((row, col)) = p.session.add_letter(ch) {
                p.view.paint_cell(row, col, p.session.grid().cell(row, col));
            }
            None
        }
        KeyInput::Backspace => {
            if let Some((row, col)) = p.session.delete_letter() {
                p.view.paint_cell(row, col, None);
            }
            None
        }
        KeyInput::Enter => match p.session.submit_guess() {
            SubmitAction::Send(word) => {
                p.view.set_input_locked(true);
                p.view.set_hint_enabled(false);
                Some((word, p.api.clone()))
            }
            SubmitAction::Notice(text) => {
                p.view.notice(text);
                None
            }
            SubmitAction::Ignored => None,
        },
    })
    .flatten();

    if let Some((word, api)) = outgoing {
        spawn_local(send_guess(api, word));
    }
}

async fn send_guess(api: ApiClient, word: String) {
    let result = api.guess(&word).await;
    let ended = with_page(|p| {
        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                gloo_console::warn!("guess failed:", e.to_string());
                p.session.reject_guess();
                p.view.set_input_locked(false);
                p.view.set_hint_enabled(p.session.hints_enabled());
                p.view.notice(&e.user_message("Invalid guess"));
                return None;
            }
        };
        let applied = p.session.apply_guess(&resp)?;
        p.view.paint_feedback(applied.row, &applied.feedback);
        p.view.paint_tracker(p.session.tracker());

        match applied.event {
            GuessEvent::Continue => {
                p.view.set_input_locked(false);
                p.view.set_hint_enabled(p.session.hints_enabled());
                return None;
            }
            GuessEvent::Won { .. } => p.view.announce("🎉 Correct!"),
            GuessEvent::Lost { solution } => match solution {
                Some(word) => p
                    .view
                    .announce(&format!("😢 Out of guesses! The word was {word}")),
                None => p.view.announce("😢 Out of guesses!"),
            },
        }
        p.view.set_hint_enabled(false);
        p.session.take_end_report().map(|report| EndOfGame {
            report,
            api: p.api.clone(),
            stats_page: p.config.stats_page.clone(),
            delay_ms: p.config.end_redirect_ms,
        })
    })
    .flatten();

    if let Some(end) = ended {
        finish(end).await;
    }
}

async fn finish(end: EndOfGame) {
    if let Err(e) = end.api.end_game(&end.report).await {
        gloo_console::error!("end-game report failed:", e.to_string());
    }
    navigate_after(&end.stats_page, end.delay_ms);
}

// --- Hints -------------------------------------------------------------------------

fn handle_hint() {
    let api = with_page(|p| {
        if !p.session.request_hint() {
            return None;
        }
        p.view.set_hint_enabled(false);
        p.view.set_input_locked(true);
        Some(p.api.clone())
    })
    .flatten();

    let Some(api) = api else { return };
    spawn_local(async move {
        let result = api.use_hint().await;
        with_page(|p| {
            match result {
                Ok(h) => {
                    p.session.apply_hint(h.lives_left);
                    p.view.set_lives(h.lives_left);
                    p.view.show_hint(&h.hint);
                    p.view.notice(&format!("Hint: {}", h.hint));
                }
                Err(e) => {
                    gloo_console::warn!("hint failed:", e.to_string());
                    p.session.reject_hint(e.lives_left());
                    if let Some(lives) = e.lives_left() {
                        p.view.set_lives(lives);
                    }
                    p.view.notice(&e.user_message("No hints available"));
                }
            }
            p.view.set_input_locked(false);
            p.view.set_hint_enabled(p.session.hints_enabled());
        });
    });
}
