//! Weekly envelope of the personalisation calendar endpoint.
//!
//! The envelope is validated strictly. Individual events stay as raw JSON so
//! that one malformed entry can be dropped without failing the week.

use serde::Deserialize;
use tracing::debug;
use uoacal_domain::TimetableEntry;

#[derive(Debug, Clone, Deserialize)]
pub struct WeekResponse {
    pub current_time: String,
    pub current_week_start: String,
    pub next_week_start: String,
    pub previous_week_start: String,
    #[serde(rename = "semester/quarter")]
    pub semester: String,
    pub week: Vec<WeekDay>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeekDay {
    pub date: String,
    pub day: String,
    pub events: Vec<serde_json::Value>,
    pub month: String,
}

impl WeekResponse {
    /// Every event of the week that matches the timetable entry schema, in
    /// day order then upstream order.
    pub fn into_entries(self) -> Vec<TimetableEntry> {
        self.week
            .into_iter()
            .flat_map(|day| day.events)
            .filter_map(|raw| match serde_json::from_value::<TimetableEntry>(raw) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(error = %err, "dropping event that does not match timetable schema");
                    None
                }
            })
            .collect()
    }
}
