//! Hop-by-hop replay of the Cognito → SSO → Cognito login.
//!
//! Two cookie jars are kept apart for the whole attempt: jar A collects the
//! broker's cookies from the authorize redirect and is replayed only on the
//! final SAML post, jar B collects everything the SSO sets. Every hop depends
//! on the previous one, so requests are strictly sequential and nothing is
//! retried.

use reqwest::header::{COOKIE, LOCATION, SET_COOKIE};
use reqwest::{Method, RequestBuilder, Response, Url};
use thiserror::Error;
use tracing::{debug, info};
use uoacal_common::auth::pkce::CHALLENGE_METHOD;
use uoacal_common::auth::{generate_code_challenge, CookieJar};
use uoacal_domain::constants::SSO_SESSION_COOKIE;
use uoacal_domain::{IdentityConfig, LoginStage, UoaCalError};

use super::saml::parse_idp_form;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Why a login attempt stopped, tagged with the last stage it reached.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("no usable redirect after {stage}: {reason}")]
    Redirect { stage: LoginStage, reason: String },
    #[error("SSO session cookie missing after {stage}")]
    Login { stage: LoginStage },
    #[error("SAML form unreadable after {stage}: {reason}")]
    Parse { stage: LoginStage, reason: String },
    #[error("request failed after {stage}: {source}")]
    Network { stage: LoginStage, source: UoaCalError },
}

impl LoginError {
    /// Last stage reached before the failure.
    pub fn stage(&self) -> LoginStage {
        match self {
            Self::Redirect { stage, .. }
            | Self::Login { stage }
            | Self::Parse { stage, .. }
            | Self::Network { stage, .. } => *stage,
        }
    }
}

/// One login attempt. Owns its cookie jars; never reused.
pub struct LoginAttempt<'a> {
    config: &'a IdentityConfig,
    manual: &'a HttpClient,
    following: &'a HttpClient,
    stage: LoginStage,
    broker_jar: CookieJar,
    sso_jar: CookieJar,
}

impl<'a> LoginAttempt<'a> {
    /// `manual` must not follow redirects; `following` must.
    pub fn new(
        config: &'a IdentityConfig,
        manual: &'a HttpClient,
        following: &'a HttpClient,
    ) -> Self {
        Self {
            config,
            manual,
            following,
            stage: LoginStage::Start,
            broker_jar: CookieJar::new(),
            sso_jar: CookieJar::new(),
        }
    }

    pub fn stage(&self) -> LoginStage {
        self.stage
    }

    /// Run every hop and return the authorization code.
    ///
    /// On failure the attempt ends in [`LoginStage::Failed`] and the error
    /// names the stage that was reached.
    pub async fn run(
        &mut self,
        code_verifier: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<String, LoginError> {
        let outcome = self.drive(code_verifier, username, password, token).await;
        if outcome.is_err() {
            self.stage = LoginStage::Failed;
        }
        outcome
    }

    async fn drive(
        &mut self,
        code_verifier: &str,
        username: &str,
        password: &str,
        token: &str,
    ) -> Result<String, LoginError> {
        // 1. Authorize: the broker redirects to the SSO.
        let authorize_url = self.authorize_url(code_verifier)?;
        let request = self.manual.request(Method::GET, authorize_url);
        let response = self.send(self.manual, request, None).await?;
        self.broker_jar.absorb_all(set_cookies(&response));
        let sso_url = self.redirect_target(&response)?;
        self.advance();

        // 2. SSO entry point redirects to the login page.
        let request = self.manual.request(Method::GET, sso_url);
        let response = self.send(self.manual, request, None).await?;
        self.sso_jar.absorb_all(set_cookies(&response));
        let login_url = self.redirect_target(&response)?;
        self.advance();

        // 3. Login page, for its session cookies.
        let request = self.following.request(Method::GET, login_url.clone());
        let response = self.send(self.following, request, Some(&self.sso_jar)).await?;
        self.sso_jar.absorb_all(set_cookies(&response));

        // 4. Username and password.
        let form = [
            ("submitted", ""),
            ("j_username", username),
            ("j_password", password),
            ("_eventId_proceed", ""),
        ];
        let request = self.manual.request(Method::POST, login_url).form(&form);
        let response = self.send(self.manual, request, Some(&self.sso_jar)).await?;
        self.sso_jar.absorb_all(set_cookies(&response));
        let token_url = self.redirect_target(&response)?;
        self.advance();

        // 5. Second-factor page.
        let request = self.following.request(Method::GET, token_url.clone());
        let response = self.send(self.following, request, Some(&self.sso_jar)).await?;
        self.sso_jar.absorb_all(set_cookies(&response));

        // 6. Second factor; a successful login sets the SSO session cookie.
        let form =
            [("submitted", ""), ("j_token", token), ("rememberMe", "on"), ("_eventId_proceed", "")];
        let request = self.following.request(Method::POST, token_url).form(&form);
        let response = self.send(self.following, request, Some(&self.sso_jar)).await?;
        self.sso_jar.absorb_all(set_cookies(&response));
        let form_page_url = response.url().clone();
        self.advance();

        if !self.sso_jar.contains(SSO_SESSION_COOKIE) {
            return Err(LoginError::Login { stage: self.stage });
        }
        self.advance();

        // 7. SAML auto-submit form.
        let body = response
            .text()
            .await
            .map_err(|err| self.network(UoaCalError::from(InfraError::from(err))))?;
        let payload = parse_idp_form(&body)
            .map_err(|err| LoginError::Parse { stage: self.stage, reason: err.to_string() })?;
        let action = form_page_url.join(&payload.action).map_err(|err| LoginError::Parse {
            stage: self.stage,
            reason: format!("invalid form action: {err}"),
        })?;
        self.advance();

        // 8. Hand the assertion back to the broker; it redirects with the code.
        let form = [
            ("RelayState", payload.relay_state.as_str()),
            ("SAMLResponse", payload.saml_response.as_str()),
        ];
        let request = self.manual.request(Method::POST, action).form(&form);
        let response = self.send(self.manual, request, Some(&self.broker_jar)).await?;
        let callback = self.redirect_target(&response)?;
        let code = callback
            .query_pairs()
            .find(|(key, _)| key == "code")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| LoginError::Redirect {
                stage: self.stage,
                reason: "redirect carries no code parameter".into(),
            })?;
        self.advance();

        Ok(code)
    }

    fn authorize_url(&self, code_verifier: &str) -> Result<Url, LoginError> {
        let challenge = generate_code_challenge(code_verifier);
        Url::parse_with_params(
            &self.config.authorize_url,
            [
                ("response_type", "code"),
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("state", self.config.state.as_str()),
                ("scope", self.config.scope.as_str()),
                ("code_challenge_method", CHALLENGE_METHOD),
                ("code_challenge", challenge.as_str()),
            ],
        )
        .map_err(|err| LoginError::Network {
            stage: self.stage,
            source: UoaCalError::Config(format!("invalid authorize url: {err}")),
        })
    }

    async fn send(
        &self,
        client: &HttpClient,
        request: RequestBuilder,
        jar: Option<&CookieJar>,
    ) -> Result<Response, LoginError> {
        let request = match jar.and_then(CookieJar::header_value) {
            Some(cookies) => request.header(COOKIE, cookies),
            None => request,
        };
        let response = client.send(request).await.map_err(|err| self.network(err))?;
        debug!(stage = %self.stage, status = %response.status(), "login hop answered");
        Ok(response)
    }

    /// `Location` of `response`, resolved against the response URL.
    fn redirect_target(&self, response: &Response) -> Result<Url, LoginError> {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| LoginError::Redirect {
                stage: self.stage,
                reason: format!("status {} without location header", response.status()),
            })?;

        response.url().join(location).map_err(|err| LoginError::Redirect {
            stage: self.stage,
            reason: format!("unparsable location header: {err}"),
        })
    }

    fn advance(&mut self) {
        self.stage = self.stage.next();
        info!(stage = %self.stage, "login stage reached");
    }

    fn network(&self, source: UoaCalError) -> LoginError {
        LoginError::Network { stage: self.stage, source }
    }
}

fn set_cookies(response: &Response) -> impl Iterator<Item = &str> {
    response.headers().get_all(SET_COOKIE).iter().filter_map(|value| value.to_str().ok())
}
