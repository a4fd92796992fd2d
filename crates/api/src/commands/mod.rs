//! HTTP handlers
//!
//! RPC handlers answer business failures as `200 { "error": … }` and input
//! validation failures as `400 { "error": … }`. The calendar file endpoint
//! reports through status codes only.

pub mod calendar;
pub mod calendar_file;
pub mod credentials;
pub mod health;

pub use calendar::create_calendar;
pub use calendar_file::{get_calendar_file, CALENDAR_DISPOSITION};
pub use credentials::get_refresh_token;
pub use health::{health, HealthResponse};
