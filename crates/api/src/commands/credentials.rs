//! `getRefreshToken` RPC

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use uoacal_core::RefreshTokenError;
use uoacal_domain::{GetRefreshTokenRequest, GetRefreshTokenResponse, UoaCalError};

use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Exchange university credentials and a second-factor token for a refresh
/// token.
pub async fn get_refresh_token(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<GetRefreshTokenRequest>,
) -> (StatusCode, Json<GetRefreshTokenResponse>) {
    let command_name = "rpc::getRefreshToken";
    let start = Instant::now();

    let result = ctx.credentials.get_refresh_token(&request).await;
    let elapsed = start.elapsed();

    match result {
        Ok(refresh_token) => {
            log_command_execution(command_name, elapsed, None);
            (StatusCode::OK, Json(GetRefreshTokenResponse::Success { refresh_token }))
        }
        Err(err) => {
            let status = match err {
                RefreshTokenError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::OK,
            };
            let error = err.to_string();
            log_command_execution(command_name, elapsed, Some(&UoaCalError::from(err)));
            (status, Json(GetRefreshTokenResponse::Failure { error }))
        }
    }
}
