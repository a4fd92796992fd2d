//! # better-uoa-cal Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite pool and an in-memory store)
//! - HTTP client implementation
//! - External service integrations (Cognito/SSO login, timetable API)
//! - iCalendar rendering and configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `uoacal-core`
//! - Depends on `uoacal-common`, `uoacal-domain` and `uoacal-core`
//! - Contains all "impure" code (I/O, network, files)

pub mod calendar;
pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use calendar::render_calendar;
pub use database::{InMemoryCalendarStore, SqliteCalendarStore};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::identity::CognitoIdentityProvider;
pub use integrations::timetable::TimetableClient;
