//! Timetable API port interfaces

use async_trait::async_trait;
use chrono::NaiveDate;
use uoacal_domain::{Result, TimetableEntry};

/// Weekly schedule feed of the personalisation API.
#[async_trait]
pub trait TimetableSource: Send + Sync {
    /// Fetch the week starting on `week_start` (a Monday).
    ///
    /// Fails when the request is rejected or the week body does not match the
    /// week schema. Individual entries that do not match the event schema are
    /// dropped by the implementation and never fail the week.
    async fn fetch_week(
        &self,
        access_token: &str,
        week_start: NaiveDate,
    ) -> Result<Vec<TimetableEntry>>;
}
