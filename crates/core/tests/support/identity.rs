use std::sync::Mutex;

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use uoacal_core::IdentityProvider;
use uoacal_domain::{Result as DomainResult, Tokens, UoaCalError};

/// Build an unsigned id token carrying `claims`.
pub fn id_token_with(claims: &serde_json::Value) -> String {
    format!("eyJhbGciOiJub25lIn0.{}.", URL_SAFE_NO_PAD.encode(claims.to_string()))
}

/// Scripted identity provider.
///
/// Records the verifier of each call so tests can check the PKCE pairing.
#[derive(Default)]
pub struct MockIdentityProvider {
    pub fail_login: bool,
    pub fail_code_exchange: bool,
    pub reject_refresh_token: bool,
    pub display_name: Option<String>,
    pub login_verifiers: Mutex<Vec<String>>,
    pub exchange_verifiers: Mutex<Vec<String>>,
    pub refresh_calls: Mutex<Vec<String>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self { display_name: Some(name.to_string()), ..Self::default() }
    }

    pub fn login_calls(&self) -> usize {
        self.login_verifiers.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn get_authorization_code(
        &self,
        code_verifier: &str,
        _username: &str,
        _password: &str,
        _token: &str,
    ) -> DomainResult<String> {
        self.login_verifiers.lock().unwrap().push(code_verifier.to_string());
        if self.fail_login {
            return Err(UoaCalError::Auth("shib_idp_session missing".into()));
        }
        Ok("auth-code-1".into())
    }

    async fn refresh_token_from_code(
        &self,
        code_verifier: &str,
        code: &str,
    ) -> DomainResult<String> {
        self.exchange_verifiers.lock().unwrap().push(code_verifier.to_string());
        if self.fail_code_exchange || code != "auth-code-1" {
            return Err(UoaCalError::TokenExchange("token endpoint returned 400".into()));
        }
        Ok("refresh-token-1".into())
    }

    async fn tokens_from_refresh_token(&self, refresh_token: &str) -> DomainResult<Tokens> {
        self.refresh_calls.lock().unwrap().push(refresh_token.to_string());
        if self.reject_refresh_token {
            return Err(UoaCalError::TokenExchange("token endpoint returned 400".into()));
        }
        let claims = match &self.display_name {
            Some(name) => serde_json::json!({ "sub": "u1", "name": name }),
            None => serde_json::json!({ "sub": "u1" }),
        };
        Ok(Tokens::new(id_token_with(&claims), "access-token-1"))
    }
}
