//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for better-uoa-cal
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum UoaCalError {
    /// Caller input rejected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any stage of the SSO login chain failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Token endpoint answered non-200 or with an unexpected body.
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    /// Timetable retrieval failed (any week).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Document store write or read failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A stored payload could not be decoded.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for better-uoa-cal operations
pub type Result<T> = std::result::Result<T, UoaCalError>;
