//! PKCE (Proof Key for Code Exchange) helpers for the Cognito authorize flow.
//!
//! Implements the S256 method of RFC 7636. A fresh pair is generated for every
//! login attempt and never reused.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Number of characters in a generated code verifier.
pub const CODE_VERIFIER_LENGTH: usize = 32;

/// Challenge method sent alongside the challenge.
pub const CHALLENGE_METHOD: &str = "S256";

/// Generate a random code verifier of [`CODE_VERIFIER_LENGTH`] characters
/// drawn from `[A-Za-z0-9]`.
#[must_use]
pub fn generate_code_verifier() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_VERIFIER_LENGTH)
        .map(char::from)
        .collect()
}

/// Derive the code challenge from a verifier.
///
/// Per RFC 7636, the challenge is BASE64URL(SHA256(ASCII(code_verifier)))
/// without padding.
#[must_use]
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Verifier/challenge pair for one authorize request.
///
/// The challenge travels in the authorize URL; the verifier stays with the
/// caller until the code is exchanged for tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct PkceChallenge {
    pub code_verifier: String,
    pub code_challenge: String,
}

impl PkceChallenge {
    /// Generate a new pair with a random verifier.
    ///
    /// # Examples
    /// ```
    /// use uoacal_common::auth::pkce::PkceChallenge;
    ///
    /// let pkce = PkceChallenge::generate();
    /// assert_eq!(pkce.code_verifier.len(), 32);
    /// assert_eq!(pkce.code_challenge.len(), 43);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        Self::from_verifier(generate_code_verifier())
    }

    /// Build the pair for a known verifier.
    #[must_use]
    pub fn from_verifier(code_verifier: impl Into<String>) -> Self {
        let code_verifier = code_verifier.into();
        let code_challenge = generate_code_challenge(&code_verifier);
        Self { code_verifier, code_challenge }
    }

    #[must_use]
    pub fn challenge_method(&self) -> &'static str {
        CHALLENGE_METHOD
    }
}

impl std::fmt::Debug for PkceChallenge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PkceChallenge")
            .field("code_verifier", &"<redacted>")
            .field("code_challenge", &self.code_challenge)
            .finish()
    }
}
