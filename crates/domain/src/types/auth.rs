//! Credential types shared by the login engine and the calendar pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Short-lived token pair obtained from a refresh token.
///
/// Never cached; a fresh pair is requested for every calendar build.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    /// Signed identity token. Only its `name` claim is read.
    pub id_token: String,
    /// Bearer token for the personalisation API.
    pub access_token: String,
}

impl Tokens {
    pub fn new(id_token: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self { id_token: id_token.into(), access_token: access_token.into() }
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokens")
            .field("id_token", &"<redacted>")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Progress marker of one login attempt through the SSO redirect chain.
///
/// Stages only move forward; any failed precondition ends the attempt in
/// [`LoginStage::Failed`] and a new attempt restarts from
/// [`LoginStage::Start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStage {
    Start,
    AuthorizedRedirect,
    SsoRedirect,
    CredentialsSubmitted,
    TokenSubmitted,
    SessionEstablished,
    SamlExtracted,
    CodeObtained,
    Failed,
}

impl_domain_status_conversions!(LoginStage {
    Start => "start",
    AuthorizedRedirect => "authorized_redirect",
    SsoRedirect => "sso_redirect",
    CredentialsSubmitted => "credentials_submitted",
    TokenSubmitted => "token_submitted",
    SessionEstablished => "session_established",
    SamlExtracted => "saml_extracted",
    CodeObtained => "code_obtained",
    Failed => "failed",
});

impl LoginStage {
    /// The stage that follows a successful transition out of `self`.
    ///
    /// Terminal stages map to themselves.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Start => Self::AuthorizedRedirect,
            Self::AuthorizedRedirect => Self::SsoRedirect,
            Self::SsoRedirect => Self::CredentialsSubmitted,
            Self::CredentialsSubmitted => Self::TokenSubmitted,
            Self::TokenSubmitted => Self::SessionEstablished,
            Self::SessionEstablished => Self::SamlExtracted,
            Self::SamlExtracted | Self::CodeObtained => Self::CodeObtained,
            Self::Failed => Self::Failed,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::CodeObtained | Self::Failed)
    }
}
