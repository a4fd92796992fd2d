//! Shared harness for router-level tests.
//!
//! The router runs in-process with the production adapters; the identity
//! broker and the timetable API are played by one WireMock server and
//! calendars live in memory.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};
use tower::ServiceExt;
use uoacal_domain::Config;
use uoacal_infra::{CognitoIdentityProvider, InMemoryCalendarStore, TimetableClient};
use uoacal_lib::{build_router, AppContext};
use wiremock::MockServer;

pub struct TestApp {
    pub router: Router,
    pub store: InMemoryCalendarStore,
    pub server: MockServer,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("response body is UTF-8")
    }
}

pub async fn test_app() -> TestApp {
    let server = MockServer::start().await;

    let mut config = Config::default();
    config.identity.authorize_url = format!("{}/oauth2/authorize/", server.uri());
    config.identity.token_url = format!("{}/oauth2/token", server.uri());
    config.timetable.calendar_url = format!("{}/calendar", server.uri());
    config.database.path = String::new();

    let identity = CognitoIdentityProvider::new(config.identity.clone(), &config.http)
        .expect("identity provider");
    let timetable =
        TimetableClient::new(config.timetable.clone(), &config.http).expect("timetable client");
    let store = InMemoryCalendarStore::new();

    let context = AppContext::from_parts(
        config,
        Arc::new(identity),
        Arc::new(timetable),
        Arc::new(store.clone()),
    );

    TestApp { router: build_router(Arc::new(context)), store, server }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.expect("router responds");
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body readable");
        TestResponse { status, headers, body }
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request =
            Request::builder().method(Method::GET).uri(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }
}

/// Unsigned JWT carrying `claims`.
pub fn id_token_with(claims: &Value) -> String {
    format!("eyJhbGciOiJSUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(claims.to_string()))
}

/// Week body with one valid timetable event.
pub fn lecture_week(start_ms: i64) -> Value {
    json!({
        "current_time": "2024-03-04T09:00:00+13:00",
        "current_week_start": "04-Mar-2024",
        "next_week_start": "11-Mar-2024",
        "previous_week_start": "26-Feb-2024",
        "semester/quarter": "Semester One 2024",
        "week": [{
            "date": "04",
            "day": "Monday",
            "month": "Mar",
            "events": [{
                "campus": "City",
                "course_code": "COMPSCI 110",
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
            }]
        }]
    })
}
