//! Identity provider port interfaces

use async_trait::async_trait;
use uoacal_domain::{Result, Tokens};

/// Cognito user pool fronting the university SSO.
///
/// Implementations own all wire details (redirect chain, cookie jars, form
/// scraping). Every failure surfaces as a single `Err`; the reason is logged
/// by the implementation, not returned.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Drive the SSO login chain and return the authorization code.
    ///
    /// `code_verifier` must be fresh and is consumed by exactly one call to
    /// [`IdentityProvider::refresh_token_from_code`].
    async fn get_authorization_code(
        &self,
        code_verifier: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<String>;

    /// Redeem an authorization code (grant `authorization_code`).
    async fn refresh_token_from_code(&self, code_verifier: &str, code: &str) -> Result<String>;

    /// Exchange a long-lived refresh token for a fresh token pair.
    async fn tokens_from_refresh_token(&self, refresh_token: &str) -> Result<Tokens>;
}
