//! End-of-game statistics screen.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, MouseEvent};

use crate::api::{ApiClient, StatsOutcome, StatsSummary};
use crate::config::ClientConfig;
use crate::view::{document, navigate, on_id, set_display, set_text};

#[wasm_bindgen]
pub fn start_stats_page() -> Result<(), JsValue> {
    let config = ClientConfig::load();
    let doc = document()?;
    let api = ApiClient::new(&config);

    spawn_local(async move {
        match api.stats_me().await {
            Ok(stats) => {
                if let Err(e) = show_stats(&doc, &stats, &config.game_page) {
                    gloo_console::error!("stats render failed:", e);
                }
            }
            Err(e) => {
                gloo_console::warn!("stats fetch failed:", e.to_string());
                if let Some(body) = doc.body() {
                    body.set_inner_html("<h1>Error: Please log in again.</h1>");
                }
            }
        }
    });
    Ok(())
}

fn show_stats(doc: &Document, stats: &StatsSummary, game_page: &str) -> Result<(), JsValue> {
    match stats.outcome() {
        StatsOutcome::Won { attempts } => {
            set_text(doc, "result", "🎉 You won!");
            if let Some(n) = attempts {
                set_text(doc, "attemptsRow", &format!("You guessed the word in {n} tries."));
            }
        }
        StatsOutcome::Lost { word } => {
            set_text(doc, "result", "😢 You lost!");
            set_text(
                doc,
                "correctWordRow",
                &format!("The correct word was: {}", word.as_deref().unwrap_or("?")),
            );
        }
    }

    set_text(doc, "gamesPlayed", &stats.games_played.to_string());
    set_text(doc, "wins", &stats.wins.to_string());
    set_text(doc, "winPercentage", &format!("{:.0}%", stats.win_percentage));
    set_text(doc, "currentStreak", &stats.current_streak.to_string());
    set_text(doc, "maxStreak", &stats.max_streak.to_string());
    set_text(doc, "livesLeft", &stats.lives_left.to_string());
    set_text(doc, "hintsUsed", &stats.hints_used.to_string());

    if stats.can_replay() {
        set_display(doc, "replayBtn", "inline-block");
        set_display(doc, "noLivesMsg", "none");
        let game_page = game_page.to_string();
        on_id(doc, "replayBtn", "click", move |_evt: MouseEvent| navigate(&game_page))?;
    } else {
        set_display(doc, "replayBtn", "none");
        set_text(doc, "noLivesMsg", "💔 No more lives left. Come back tomorrow!");
    }
    Ok(())
}
