//! Common utilities shared across the uoacal crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: validation helpers and timetable week arithmetic
//! - `platform`: identity provider plumbing (PKCE, cookie jars, id tokens)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod validation;

// Platform tier
// -------------------------------------------------------------------
#[cfg(feature = "platform")]
pub mod auth;

#[cfg(feature = "platform")]
pub use auth::{CookieJar, PkceChallenge};
#[cfg(feature = "foundation")]
pub use validation::{FieldError, ValidationError, ValidationResult};
