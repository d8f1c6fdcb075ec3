//! Client settings.
//!
//! Pages may embed `<script type="application/json" id="wordle-config">` with
//! any subset of the fields below; everything missing falls back to the
//! defaults used by the local development server.

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_ELEMENT_ID: &str = "wordle-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub notice_ms: u32,       // transient message lifetime
    pub end_redirect_ms: u32, // pause on the win/loss message before leaving
    pub request_timeout_ms: u32,
    pub game_page: String,
    pub stats_page: String,
    pub index_page: String,
    pub admin_page: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:5000".into(),
            notice_ms: 2500,
            end_redirect_ms: 3000,
            request_timeout_ms: 10_000,
            game_page: "game.html".into(),
            stats_page: "stats.html".into(),
            index_page: "index.html".into(),
            admin_page: "admin.html".into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid wordle-config json: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for JsValue {
    fn from(e: ConfigError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl ClientConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut cfg: ClientConfig = serde_json::from_str(text)?;
        cfg.api_base = cfg.api_base.trim_end_matches('/').to_string();
        Ok(cfg)
    }

    /// Read the embedded config block. A missing block yields defaults; a
    /// malformed one is logged and also yields defaults.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(t) if !t.trim().is_empty() => Self::from_json(&t).unwrap_or_else(|e| {
                gloo_console::warn!(e.to_string());
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg = ClientConfig::from_json(r#"{"api_base":"https://words.example/","notice_ms":1000}"#)
            .unwrap();
        assert_eq!(cfg.api_base, "https://words.example");
        assert_eq!(cfg.notice_ms, 1000);
        assert_eq!(cfg.end_redirect_ms, 3000);
        assert_eq!(cfg.stats_page, "stats.html");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_bad_json_errors() {
        assert!(ClientConfig::from_json(r#"{"notice_ms":"soon"}"#).is_err());
    }
}
