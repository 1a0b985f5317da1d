//! Error responses.
//!
//! Successful handlers return bare JSON entities; only failures get a
//! structured body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use wordgames_core::{ErrorResponse, WordgamesError};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub WordgamesError);

impl From<WordgamesError> for AppError {
    fn from(err: WordgamesError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Wraps `data` as a 200 JSON response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}
