//! Upstream timetable entry as published by the personalisation API.
//!
//! Deserializing into [`TimetableEntry`] is the per-event schema check: a
//! missing field, a wrong type, or a source other than `"timetable"` fails.
//! Timestamps accept any JSON number, integral or not.

use serde::{Deserialize, Serialize};

/// Origin tag of an upstream event. Only timetable entries are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSource {
    #[serde(rename = "timetable")]
    Timetable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub campus: String,
    pub course_code: String,
    pub course_name: String,
    #[serde(rename = "eventTime")]
    pub event_time: f64,
    pub event_type: String,
    pub map_url: String,
    pub room: String,
    pub source: EventSource,
    pub time_end_display: String,
    pub time_start_display: String,
    /// Unix timestamp (milliseconds)
    pub timestamp_end: f64,
    /// Unix timestamp (milliseconds)
    pub timestamp_start: f64,
    #[serde(rename = "type")]
    pub kind: String,
}
