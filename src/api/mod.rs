//! Server wire contract and HTTP client.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, SERVER_ERROR, decode_response};
pub use types::*;
