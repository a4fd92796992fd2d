//! Token endpoint exchanges (`authorization_code` and `refresh_token`).
//!
//! Both exchanges accept only a `200` answer whose body matches the expected
//! shape exactly; anything else is a `TokenExchange` error.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;
use uoacal_domain::{IdentityConfig, Result, Tokens, UoaCalError};

use crate::http::HttpClient;

/// Body of a successful `authorization_code` grant.
#[derive(Deserialize)]
pub struct AuthorizationCodeResponse {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// Only bearer tokens are accepted from the refresh grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TokenType {
    Bearer,
}

/// Body of a successful `refresh_token` grant.
#[derive(Deserialize)]
pub struct RefreshTokenResponse {
    pub id_token: String,
    pub access_token: String,
    pub expires_in: f64,
    pub token_type: TokenType,
}

/// Redeem an authorization code for a refresh token.
pub async fn redeem_authorization_code(
    client: &HttpClient,
    config: &IdentityConfig,
    code_verifier: &str,
    code: &str,
) -> Result<String> {
    let form = [
        ("client_id", config.client_id.as_str()),
        ("code", code),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("grant_type", "authorization_code"),
        ("code_verifier", code_verifier),
    ];
    let body: AuthorizationCodeResponse =
        post_token_form(client, config, &form, "authorization_code").await?;
    Ok(body.refresh_token)
}

/// Exchange a refresh token for a fresh id/access token pair.
pub async fn refresh_tokens(
    client: &HttpClient,
    config: &IdentityConfig,
    refresh_token: &str,
) -> Result<Tokens> {
    let form = [
        ("client_id", config.client_id.as_str()),
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
    ];
    let body: RefreshTokenResponse =
        post_token_form(client, config, &form, "refresh_token").await?;
    Ok(Tokens::new(body.id_token, body.access_token))
}

async fn post_token_form<T>(
    client: &HttpClient,
    config: &IdentityConfig,
    form: &[(&str, &str)],
    grant: &'static str,
) -> Result<T>
where
    T: DeserializeOwned,
{
    let request = client.request(Method::POST, &config.token_url).form(form);
    let response = client.send(request).await.map_err(|err| {
        warn!(grant, error = %err, "token endpoint unreachable");
        UoaCalError::TokenExchange(format!("{grant} grant failed: {err}"))
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!(grant, %status, "token endpoint rejected grant");
        return Err(UoaCalError::TokenExchange(format!("{grant} grant answered {status}")));
    }

    let bytes = response.bytes().await.map_err(|err| {
        warn!(grant, error = %err, "token response body unreadable");
        UoaCalError::TokenExchange(format!("{grant} body unreadable: {err}"))
    })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        warn!(grant, error = %err, "token response has unexpected shape");
        UoaCalError::TokenExchange(format!("{grant} body has unexpected shape: {err}"))
    })
}
