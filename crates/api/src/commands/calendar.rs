//! `createCalendar` RPC

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uoacal_core::CreateCalendarError;
use uoacal_domain::{CreateCalendarRequest, CreateCalendarResponse, UoaCalError};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Build this year's calendar for the owner of a refresh token and return
/// the id it is served under.
pub async fn create_calendar(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<CreateCalendarRequest>,
) -> (StatusCode, Json<CreateCalendarResponse>) {
    let command_name = "rpc::createCalendar";
    let start = Instant::now();

    let result = ctx.calendars.create_calendar(&request).await;
    let elapsed = start.elapsed();

    match result {
        Ok(id) => {
            log_command_execution(command_name, elapsed, None);
            (StatusCode::OK, Json(CreateCalendarResponse::Success { id }))
        }
        Err(err) => {
            let status = match err {
                CreateCalendarError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::OK,
            };
            let error = err.to_string();
            log_command_execution(command_name, elapsed, Some(&UoaCalError::from(err)));
            (status, Json(CreateCalendarResponse::Failure { error }))
        }
    }
}
