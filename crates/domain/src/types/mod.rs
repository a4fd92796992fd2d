//! Domain types and models

pub mod auth;
pub mod calendar;
pub mod rpc;
pub mod timetable;

pub use auth::{LoginStage, Tokens};
pub use calendar::{CalendarDocument, CalendarEvent, CalendarMethod, NewCalendar, StoredCalendar};
pub use rpc::{
    CalendarQuery, CreateCalendarRequest, CreateCalendarResponse, GetRefreshTokenRequest,
    GetRefreshTokenResponse,
};
pub use timetable::{EventSource, TimetableEntry};
