//! Calendar documents: building, storing and loading them.

pub mod builder;
pub mod ports;
pub mod service;

pub use builder::{build_document, create_calendar};
pub use service::{CalendarService, CreateCalendarError};
