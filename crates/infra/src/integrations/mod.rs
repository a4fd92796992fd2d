//! External service integrations

pub mod identity;
pub mod timetable;
