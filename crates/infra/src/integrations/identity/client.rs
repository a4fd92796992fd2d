//! [`IdentityProvider`] adapter for the Cognito user pool.

use async_trait::async_trait;
use tracing::{info, warn};
use uoacal_core::IdentityProvider;
use uoacal_domain::{HttpConfig, IdentityConfig, Result, Tokens, UoaCalError};

use super::flow::LoginAttempt;
use super::tokens::{redeem_authorization_code, refresh_tokens};
use crate::http::{HttpClient, HttpClientBuilder};

pub struct CognitoIdentityProvider {
    config: IdentityConfig,
    manual: HttpClient,
    following: HttpClient,
}

impl CognitoIdentityProvider {
    /// Login hops and token grants are sent exactly once, whatever
    /// `http.max_attempts` says: credentials, one-time tokens and
    /// authorization codes must not be replayed.
    pub fn new(config: IdentityConfig, http: &HttpConfig) -> Result<Self> {
        Ok(Self {
            config,
            manual: single_attempt(http, false)?,
            following: single_attempt(http, true)?,
        })
    }
}

fn single_attempt(http: &HttpConfig, follow_redirects: bool) -> Result<HttpClient> {
    HttpClientBuilder::from_config(http)
        .max_attempts(1)
        .follow_redirects(follow_redirects)
        .build()
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn get_authorization_code(
        &self,
        code_verifier: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<String> {
        let mut attempt = LoginAttempt::new(&self.config, &self.manual, &self.following);

        match attempt.run(code_verifier, username, password, token).await {
            Ok(code) => {
                info!("authorization code obtained");
                Ok(code)
            }
            Err(err) => {
                warn!(stage = %err.stage(), error = %err, "login attempt failed");
                Err(UoaCalError::Auth("login failed".into()))
            }
        }
    }

    async fn refresh_token_from_code(&self, code_verifier: &str, code: &str) -> Result<String> {
        redeem_authorization_code(&self.following, &self.config, code_verifier, code).await
    }

    async fn tokens_from_refresh_token(&self, refresh_token: &str) -> Result<Tokens> {
        refresh_tokens(&self.following, &self.config, refresh_token).await
    }
}
