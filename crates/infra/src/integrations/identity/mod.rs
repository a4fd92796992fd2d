//! Cognito user pool + university SSO (Shibboleth) integration.
//!
//! The login engine replays the browser flow: authorize redirect, SSO login
//! page, username/password form, second-factor form, SAML auto-submit form,
//! and finally the Cognito redirect that carries the authorization code.
//!
//! ## Modules
//! - [`flow`]: the hop-by-hop login state machine
//! - [`saml`]: extraction of the SAML auto-submit form
//! - [`tokens`]: token endpoint exchanges
//! - [`client`]: [`CognitoIdentityProvider`], the `IdentityProvider` adapter

pub mod client;
pub mod flow;
pub mod saml;
pub mod tokens;

pub use client::CognitoIdentityProvider;
pub use flow::{LoginAttempt, LoginError};
pub use saml::{parse_idp_form, IdpFormPayload, SamlFormError};
