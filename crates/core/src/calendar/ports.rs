//! Document store port interfaces

use async_trait::async_trait;
use uoacal_domain::{NewCalendar, Result, StoredCalendar};

/// Append-only store of serialized calendar documents.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Persist a document and return its newly assigned id.
    async fn add(&self, calendar: NewCalendar) -> Result<String>;

    /// Look a document up by id. Unknown ids are `Ok(None)`.
    async fn get(&self, id: &str) -> Result<Option<StoredCalendar>>;
}
