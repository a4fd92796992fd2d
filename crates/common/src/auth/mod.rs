//! Identity provider plumbing for the Cognito/SAML login engine.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  login engine    │  (uoacal-infra)
//! └────────┬─────────┘
//!          │
//!          ├──► PkceChallenge   (verifier + S256 challenge)
//!          ├──► CookieJar       (one per cookie domain)
//!          └──► id_token        (unverified JWT claim reads)
//! ```
//!
//! Everything here is synchronous and free of I/O so the login engine can be
//! exercised step by step in tests.

pub mod cookies;
pub mod id_token;
pub mod pkce;

pub use cookies::CookieJar;
pub use id_token::{decode_claims, display_name, IdTokenError};
pub use pkce::{generate_code_challenge, generate_code_verifier, PkceChallenge};
