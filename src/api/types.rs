//! JSON bodies exchanged with the game server.

use serde::{Deserialize, Serialize};

use crate::model::TileFeedback;

/// `{}` request body.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Empty {}

// --- Game ---------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StartGameResponse {
    pub lives_left: u32,
    /// Today's word; the server only sends it in debug builds.
    #[serde(default)]
    pub word: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GuessRequest<'a> {
    pub guess: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GuessResponse {
    pub feedback: TileFeedback,
    pub correct: bool,
    #[serde(default)]
    pub solution_word: Option<String>,
    #[serde(default)]
    pub attempts: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HintResponse {
    pub lives_left: u32,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndGameRequest {
    pub won: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
}

/// Body of any non-2xx response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub lives_left: Option<u32>,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// --- Stats --------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatsSummary {
    pub games_played: u32,
    pub wins: u32,
    #[serde(default)]
    pub win_percentage: f64,
    pub current_streak: u32,
    pub max_streak: u32,
    pub lives_left: u32,
    pub hints_used: u32,
    #[serde(default)]
    pub today_word: Option<String>,
    #[serde(default)]
    pub attempts: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsOutcome {
    Won { attempts: Option<u32> },
    Lost { word: Option<String> },
}

impl StatsSummary {
    /// Today's result as the stats screen reports it: a win is a known word
    /// with a live streak.
    pub fn outcome(&self) -> StatsOutcome {
        let has_word = self.today_word.as_deref().is_some_and(|w| !w.is_empty());
        if has_word && self.current_streak > 0 {
            StatsOutcome::Won {
                attempts: self.attempts,
            }
        } else {
            StatsOutcome::Lost {
                word: self.today_word.clone(),
            }
        }
    }

    pub fn can_replay(&self) -> bool {
        self.lives_left > 0
    }
}

// --- Account ------------------------------------------------------------------

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// --- Admin --------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminWord {
    pub id: i64,
    pub word: String,
    pub is_solution: bool,
    #[serde(default)]
    pub used: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct AddWordRequest {
    pub word: String,
    pub is_solution: bool,
}

impl AddWordRequest {
    /// Normalises the typed word; `None` when nothing was entered.
    pub fn new(raw: &str, is_solution: bool) -> Option<Self> {
        let word = raw.trim().to_lowercase();
        (!word.is_empty()).then_some(Self { word, is_solution })
    }
}
