//! # better-uoa-cal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the identity provider, the
//!   timetable API and the document store
//! - The credential service (login → refresh token)
//! - The timetable translator and calendar service (refresh token → stored
//!   calendar)
//!
//! ## Architecture Principles
//! - Only depends on `uoacal-common` and `uoacal-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod calendar;
pub mod credentials;
pub mod timetable;

pub use calendar::ports::CalendarStore;
pub use calendar::{build_document, create_calendar, CalendarService, CreateCalendarError};
pub use credentials::ports::IdentityProvider;
pub use credentials::{validate_login, CredentialService, RefreshTokenError};
pub use timetable::ports::TimetableSource;
pub use timetable::{to_calendar_event, TimetableTranslator};
