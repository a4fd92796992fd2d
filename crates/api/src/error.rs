//! HTTP mapping of domain errors for the calendar file endpoint.
//!
//! The RPC handlers answer `{ "error": … }` bodies themselves; this type only
//! carries a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};
use uoacal_domain::UoaCalError;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub UoaCalError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            UoaCalError::InvalidInput(_) | UoaCalError::Validation(_) => StatusCode::BAD_REQUEST,
            UoaCalError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        } else {
            warn!(%status, error = %self.0, "request rejected");
        }
        status.into_response()
    }
}
