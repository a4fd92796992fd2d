//! Calendar document types.
//!
//! A [`CalendarDocument`] is built once per successful timetable fetch,
//! serialized to JSON, and stored as an opaque blob. The read path decodes it
//! again and renders iCalendar text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, UoaCalError};
use crate::impl_domain_status_conversions;

/// One calendar entry derived from exactly one upstream timetable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub location: String,
    pub description: String,
}

/// iTIP method of a calendar document. Only request semantics are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMethod {
    #[default]
    Request,
}

impl_domain_status_conversions!(CalendarMethod {
    Request => "request",
});

/// Named aggregate of calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDocument {
    pub name: String,
    pub method: CalendarMethod,
    pub events: Vec<CalendarEvent>,
}

impl CalendarDocument {
    pub fn new(name: impl Into<String>, events: Vec<CalendarEvent>) -> Self {
        Self { name: name.into(), method: CalendarMethod::Request, events }
    }

    /// Serialize into the blob handed to the document store.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|err| UoaCalError::Internal(format!("failed to serialize calendar: {err}")))
    }

    /// Decode a stored blob. Anything that does not parse is corrupt data.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data)
            .map_err(|err| UoaCalError::CorruptData(format!("stored calendar is invalid: {err}")))
    }
}

/// Record submitted to the document store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalendar {
    pub data: String,
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for NewCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewCalendar")
            .field("data_len", &self.data.len())
            .field("has_refresh_token", &self.refresh_token.is_some())
            .finish()
    }
}

/// Record returned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCalendar {
    pub id: String,
    pub data: String,
    #[serde(skip_serializing)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}
