//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    COGNITO_AUTHORIZE_URL, COGNITO_CLIENT_ID, COGNITO_REDIRECT_URI, COGNITO_SCOPE, COGNITO_STATE,
    COGNITO_TOKEN_URL, DEFAULT_BIND_ADDRESS, DEFAULT_DB_POOL_SIZE, DEFAULT_HTTP_MAX_ATTEMPTS,
    DEFAULT_HTTP_TIMEOUT_SECS, TIMETABLE_URL,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub identity: IdentityConfig,
    pub timetable: TimetableConfig,
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_address: DEFAULT_BIND_ADDRESS.to_string() }
    }
}

/// Identity broker (Cognito) endpoints and client registration.
///
/// The SSO hops are discovered from redirects, so only the broker side is
/// configured here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub authorize_url: String,
    pub token_url: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub state: String,
    pub scope: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            authorize_url: COGNITO_AUTHORIZE_URL.to_string(),
            token_url: COGNITO_TOKEN_URL.to_string(),
            client_id: COGNITO_CLIENT_ID.to_string(),
            redirect_uri: COGNITO_REDIRECT_URI.to_string(),
            state: COGNITO_STATE.to_string(),
            scope: COGNITO_SCOPE.to_string(),
        }
    }
}

/// Personalisation API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    pub calendar_url: String,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self { calendar_url: TIMETABLE_URL.to_string() }
    }
}

/// Database configuration
///
/// An empty `path` selects the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "uoacal.db".to_string(), pool_size: DEFAULT_DB_POOL_SIZE }
    }
}

impl DatabaseConfig {
    /// Whether calendars should be kept in process memory only.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path.trim().is_empty()
    }
}

/// Outbound HTTP configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    /// Total attempts per request (initial try + retries).
    pub max_attempts: usize,
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            user_agent: None,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Default filter when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { json: false, filter: "info,uoacal=debug".to_string() }
    }
}
