use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use super::types::ErrorBody;

pub const SERVER_ERROR: &str = "Server error";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
        lives_left: Option<u32>,
    },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the transient notice. Server-provided messages win; otherwise
    /// `fallback` for server refusals and a generic line for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server {
                message: Some(m), ..
            } if !m.is_empty() => m.clone(),
            ApiError::Server { .. } => fallback.to_string(),
            ApiError::Timeout(_) => "Request timed out".to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => SERVER_ERROR.to_string(),
        }
    }

    /// Lives count some endpoints attach to their refusals.
    pub fn lives_left(&self) -> Option<u32> {
        match self {
            ApiError::Server { lives_left, .. } => *lives_left,
            _ => None,
        }
    }
}

impl From<ApiError> for JsValue {
    fn from(e: ApiError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Turn a status line and raw body into a typed result.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        // Acknowledgement-only endpoints may answer with an empty body.
        let body = if body.trim().is_empty() { "{}" } else { body };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let err: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        Err(ApiError::Server {
            status,
            message: err.error,
            lives_left: err.lives_left,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{HintResponse, MessageResponse};

    #[test]
    fn test_success_decodes() {
        let r: HintResponse = decode_response(200, r#"{"lives_left":2,"hint":"starts with P"}"#).unwrap();
        assert_eq!(r.lives_left, 2);
        assert_eq!(r.hint, "starts with P");
    }

    #[test]
    fn test_empty_ack_body() {
        let r: MessageResponse = decode_response(204, "").unwrap();
        assert_eq!(r.message, None);
    }

    #[test]
    fn test_server_error_carries_message_and_lives() {
        let err = decode_response::<HintResponse>(403, r#"{"error":"No lives left","lives_left":0}"#)
            .unwrap_err();
        assert_eq!(err.lives_left(), Some(0));
        assert_eq!(err.user_message("No hints available"), "No lives left");
    }

    #[test]
    fn test_server_error_without_json_uses_fallback() {
        let err = decode_response::<HintResponse>(500, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, message: None, .. }));
        assert_eq!(err.user_message("Invalid guess"), "Invalid guess");
    }

    #[test]
    fn test_malformed_success_is_decode_error() {
        let err = decode_response::<HintResponse>(200, r#"{"hint":3}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.user_message("x"), SERVER_ERROR);
    }
}
