//! Route table

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::commands::{create_calendar, get_calendar_file, get_refresh_token, health};
use crate::AppContext;

pub fn build_router(context: Arc<AppContext>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/rpc/getRefreshToken", post(get_refresh_token))
        .route("/rpc/createCalendar", post(create_calendar))
        .route("/calendar", get(get_calendar_file))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(context)
}
