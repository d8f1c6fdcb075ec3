//! Wordle Web core crate.
//!
//! Browser client for a daily five-letter word game. The guess engine in
//! [`model`] is plain Rust and runs under native `cargo test`; [`api`] speaks
//! the server's JSON contract; [`view`] and [`pages`] are the DOM glue
//! exported to JS (`start_game()`, `start_stats_page()`, ...).

use wasm_bindgen::prelude::*;

pub mod api;
pub mod config;
pub mod model;
pub mod pages;
pub mod view;

pub use api::{ApiClient, ApiError};
pub use config::ClientConfig;
pub use model::{FeedbackColor, GameSession, LetterStatus, LetterTracker};
pub use pages::admin::start_admin_page;
pub use pages::auth::start_auth_page;
pub use pages::game::start_game;
pub use pages::profile::start_profile_page;
pub use pages::stats::start_stats_page;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
