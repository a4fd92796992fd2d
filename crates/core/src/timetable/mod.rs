//! Timetable-to-calendar translation.

pub mod ports;
pub mod service;

pub use service::{to_calendar_event, TimetableTranslator};
