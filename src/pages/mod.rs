//! One entry point per HTML page. Each is exported to JS and called once the
//! page has loaded.

pub mod admin;
pub mod auth;
pub mod game;
pub mod profile;
pub mod stats;
