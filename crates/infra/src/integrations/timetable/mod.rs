//! University personalisation API (weekly timetable).
//!
//! - [`schema`]: the weekly envelope returned for one `start_date`
//! - [`client`]: [`TimetableClient`], the `TimetableSource` adapter

pub mod client;
pub mod schema;

pub use client::TimetableClient;
pub use schema::{WeekDay, WeekResponse};
