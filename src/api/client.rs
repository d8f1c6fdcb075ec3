//! Cookie-authenticated JSON client for the game server.

use futures::future::{Either, select};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use super::error::{ApiError, decode_response};
use super::types::*;
use crate::config::ClientConfig;

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // --- Transport -------------------------------------------------------------

    fn with_session(builder: RequestBuilder) -> RequestBuilder {
        builder.credentials(RequestCredentials::Include)
    }

    /// Send, read the body and decode, racing the whole exchange against the
    /// configured timeout.
    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, ApiError> {
        let exchange = async move {
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok::<_, ApiError>((status, body))
        };
        let timeout = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(exchange, timeout);
        match select(exchange, timeout).await {
            Either::Left((result, _)) => {
                let (status, body) = result?;
                decode_response(status, &body)
            }
            Either::Right(((), _)) => Err(ApiError::Timeout(self.timeout_ms)),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::with_session(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.execute(request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        // `json` sets Content-Type: application/json.
        let request = Self::with_session(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.execute(request).await
    }

    async fn post_bare<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::with_session(Request::post(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = Self::with_session(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        self.execute(request).await
    }

    // --- Game --------------------------------------------------------------------

    pub async fn start_game(&self) -> Result<StartGameResponse, ApiError> {
        self.post("/api/start-game", &Empty {}).await
    }

    pub async fn guess(&self, word: &str) -> Result<GuessResponse, ApiError> {
        self.post("/api/guess", &GuessRequest { guess: word }).await
    }

    pub async fn use_hint(&self) -> Result<HintResponse, ApiError> {
        self.post("/api/use-hint", &Empty {}).await
    }

    pub async fn end_game(&self, report: &EndGameRequest) -> Result<MessageResponse, ApiError> {
        self.post("/api/end-game", report).await
    }

    pub async fn stats_me(&self) -> Result<StatsSummary, ApiError> {
        self.get("/api/stats/me").await
    }

    // --- Account -----------------------------------------------------------------

    pub async fn login(&self, req: &LoginRequest) -> Result<MessageResponse, ApiError> {
        self.post("/api/login", req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.post("/api/signup", req).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.post_bare("/api/logout").await
    }

    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.get("/api/me").await
    }

    pub async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.post("/api/change-password", req).await
    }

    pub async fn delete_account(&self) -> Result<MessageResponse, ApiError> {
        self.post_bare("/api/delete-account").await
    }

    // --- Admin -------------------------------------------------------------------

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get("/api/admin/users").await
    }

    pub async fn admin_words(&self) -> Result<Vec<AdminWord>, ApiError> {
        self.get("/api/admin/words").await
    }

    pub async fn add_word(&self, req: &AddWordRequest) -> Result<MessageResponse, ApiError> {
        self.post("/api/admin/add-word", req).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/delete-user/{id}")).await
    }

    pub async fn delete_word(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/delete-word/{id}")).await
    }
}
