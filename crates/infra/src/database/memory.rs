//! Process-local [`CalendarStore`], selected when no database path is set.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uoacal_core::CalendarStore;
use uoacal_domain::{NewCalendar, Result, StoredCalendar};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryCalendarStore {
    records: Arc<RwLock<HashMap<String, StoredCalendar>>>,
}

impl InMemoryCalendarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CalendarStore for InMemoryCalendarStore {
    async fn add(&self, calendar: NewCalendar) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let record = StoredCalendar {
            id: id.clone(),
            data: calendar.data,
            refresh_token: calendar.refresh_token,
            created_at: Utc::now().timestamp(),
        };
        self.records.write().insert(id.clone(), record);
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<StoredCalendar>> {
        Ok(self.records.read().get(id).cloned())
    }
}
