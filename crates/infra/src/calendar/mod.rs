//! iCalendar rendering of stored calendar documents.

pub mod ics;

pub use ics::{event_uid, render_calendar, CALENDAR_CONTENT_TYPE};
