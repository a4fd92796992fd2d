//! Request and response bodies of the public RPC surface.
//!
//! Business failures travel as `{ "error": "…" }` inside a successful
//! response so callers always receive a typed outcome.

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRefreshTokenRequest {
    pub username: String,
    pub password: String,
    pub token: String,
}

impl std::fmt::Debug for GetRefreshTokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetRefreshTokenRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetRefreshTokenResponse {
    Success {
        #[serde(rename = "refreshToken")]
        refresh_token: String,
    },
    Failure {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCalendarRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateCalendarResponse {
    Success { id: String },
    Failure { error: String },
}

/// Query string of the calendar file endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarQuery {
    pub id: Option<String>,
}
