//! Credential exchange: username/password/second factor in, refresh token out.

pub mod ports;
pub mod service;

pub use service::{validate_login, CredentialService, RefreshTokenError};
