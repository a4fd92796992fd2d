//! Shared fixtures for `uoacal-infra` integration tests.

#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use uoacal_domain::{HttpConfig, IdentityConfig, TimetableConfig};
use uoacal_infra::HttpClient;
use wiremock::MockServer;

/// Identity configuration pointing both endpoints at `server`.
pub fn identity_config(server: &MockServer) -> IdentityConfig {
    IdentityConfig {
        authorize_url: format!("{}/oauth2/authorize/", server.uri()),
        token_url: format!("{}/oauth2/token", server.uri()),
        ..IdentityConfig::default()
    }
}

pub fn timetable_config(server: &MockServer) -> TimetableConfig {
    TimetableConfig { calendar_url: format!("{}/calendar", server.uri()) }
}

pub fn http_client(follow_redirects: bool) -> HttpClient {
    HttpClient::from_config(&HttpConfig::default(), follow_redirects).expect("http client")
}

/// Unsigned JWT carrying `claims`.
pub fn id_token_with(claims: &Value) -> String {
    format!("eyJhbGciOiJSUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(claims.to_string()))
}

/// One upstream timetable entry that passes the event schema.
pub fn timetable_event(course_code: &str, start_ms: i64) -> Value {
    json!({
        "campus": "City",
        "course_code": course_code,
        "course_name": "Introduction to Computer Science",
        "eventTime": start_ms,
        "event_type": "Lecture",
        "map_url": "https://maps.auckland.ac.nz/302",
        "room": "302-G20",
        "source": "timetable",
        "time_end_display": "10:00 AM",
        "time_start_display": "9:00 AM",
        "timestamp_end": start_ms + 3_600_000,
        "timestamp_start": start_ms,
        "type": "LEC"
    })
}

/// Week body wrapping `events` in a single day.
pub fn week_body(events: Vec<Value>) -> Value {
    json!({
        "current_time": "2024-03-04T09:00:00+13:00",
        "current_week_start": "04-Mar-2024",
        "next_week_start": "11-Mar-2024",
        "previous_week_start": "26-Feb-2024",
        "semester/quarter": "Semester One 2024",
        "week": [
            { "date": "04", "day": "Monday", "events": events, "month": "Mar" }
        ]
    })
}
