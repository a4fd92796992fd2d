use std::sync::Mutex;

use async_trait::async_trait;
use uoacal_core::CalendarStore;
use uoacal_domain::{NewCalendar, Result as DomainResult, StoredCalendar, UoaCalError};

/// Vec-backed store with sequential ids.
#[derive(Default)]
pub struct MockCalendarStore {
    pub fail_writes: bool,
    pub calendars: Mutex<Vec<StoredCalendar>>,
}

impl MockCalendarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    /// Seed a record directly, bypassing `add`.
    pub fn with_record(self, id: &str, data: &str) -> Self {
        self.calendars.lock().unwrap().push(StoredCalendar {
            id: id.into(),
            data: data.into(),
            refresh_token: None,
            created_at: 0,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.calendars.lock().unwrap().len()
    }
}

#[async_trait]
impl CalendarStore for MockCalendarStore {
    async fn add(&self, calendar: NewCalendar) -> DomainResult<String> {
        if self.fail_writes {
            return Err(UoaCalError::Persistence("disk full".into()));
        }
        let mut calendars = self.calendars.lock().unwrap();
        let id = format!("cal-{}", calendars.len() + 1);
        calendars.push(StoredCalendar {
            id: id.clone(),
            data: calendar.data,
            refresh_token: calendar.refresh_token,
            created_at: 1_700_000_000,
        });
        Ok(id)
    }

    async fn get(&self, id: &str) -> DomainResult<Option<StoredCalendar>> {
        Ok(self.calendars.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }
}
