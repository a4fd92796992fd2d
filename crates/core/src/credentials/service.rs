//! Credential service - login once, hand back a refresh token

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};
use uoacal_common::auth::PkceChallenge;
use uoacal_common::validation::{StringValidator, ValidationError};
use uoacal_domain::{GetRefreshTokenRequest, UoaCalError};

use super::ports::IdentityProvider;

/// Outcome of a failed `getRefreshToken` call.
///
/// `Display` is the exact message returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefreshTokenError {
    #[error("{0}")]
    InvalidInput(ValidationError),
    #[error("Failed to retrieve authorization code.")]
    AuthorizationCode,
    #[error("Failed to get refresh token.")]
    RefreshToken,
}

impl From<RefreshTokenError> for UoaCalError {
    fn from(err: RefreshTokenError) -> Self {
        match err {
            RefreshTokenError::InvalidInput(inner) => Self::Validation(inner.to_string()),
            RefreshTokenError::AuthorizationCode => Self::Auth(err.to_string()),
            RefreshTokenError::RefreshToken => Self::TokenExchange(err.to_string()),
        }
    }
}

/// Reject blank credentials before any network traffic.
pub fn validate_login(request: &GetRefreshTokenRequest) -> Result<(), ValidationError> {
    let required = StringValidator::new().not_empty();
    let mut errors = ValidationError::new();
    errors.check("username", &request.username, &required);
    errors.check("password", &request.password, &required);
    errors.check("token", &request.token, &required);
    errors.into_result()
}

pub struct CredentialService {
    identity: Arc<dyn IdentityProvider>,
}

impl CredentialService {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    /// Log in with university credentials plus a second-factor token and
    /// return a refresh token.
    ///
    /// A fresh PKCE verifier is generated per call and used for exactly one
    /// authorization exchange.
    #[instrument(skip_all)]
    pub async fn get_refresh_token(
        &self,
        request: &GetRefreshTokenRequest,
    ) -> Result<String, RefreshTokenError> {
        validate_login(request).map_err(RefreshTokenError::InvalidInput)?;

        let pkce = PkceChallenge::generate();

        let code = self
            .identity
            .get_authorization_code(
                &pkce.code_verifier,
                &request.username,
                &request.password,
                &request.token,
            )
            .await
            .map_err(|err| {
                warn!(error = %err, "login chain did not yield an authorization code");
                RefreshTokenError::AuthorizationCode
            })?;

        let refresh_token = self
            .identity
            .refresh_token_from_code(&pkce.code_verifier, &code)
            .await
            .map_err(|err| {
                warn!(error = %err, "authorization code exchange failed");
                RefreshTokenError::RefreshToken
            })?;

        info!("refresh token issued");
        Ok(refresh_token)
    }
}
