//! Calendar file endpoint (`GET /calendar?id=…`)

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use uoacal_domain::CalendarQuery;
use uoacal_infra::calendar::{render_calendar, CALENDAR_CONTENT_TYPE};

use crate::error::ApiError;
use crate::utils::logging::log_command_execution;
use crate::AppContext;

pub const CALENDAR_DISPOSITION: &str = "attachment; filename=\"calendar.ics\"";

/// Serve a stored calendar as an `.ics` attachment.
///
/// `400` without an id, `404` for an unknown id, `500` when the stored
/// payload does not decode or the store cannot be read.
pub async fn get_calendar_file(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<CalendarQuery>,
) -> Result<Response, ApiError> {
    let command_name = "calendar::get_calendar_file";
    let start = Instant::now();

    let id = query.id.unwrap_or_default();
    let result = ctx.calendars.load_document(&id).await;
    let elapsed = start.elapsed();

    let document = match result {
        Ok(document) => {
            log_command_execution(command_name, elapsed, None);
            document
        }
        Err(err) => {
            log_command_execution(command_name, elapsed, Some(&err));
            return Err(ApiError(err));
        }
    };

    let body = render_calendar(&document);
    Ok((
        [(CONTENT_TYPE, CALENDAR_CONTENT_TYPE), (CONTENT_DISPOSITION, CALENDAR_DISPOSITION)],
        body,
    )
        .into_response())
}
