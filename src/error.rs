//! # Centralized Error Handling
//!
//! Every failure a handler can produce is an [`AppError`]. The conversion into an
//! HTTP response lives here so that handlers only need to return [`AppResult`].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Central application error type.
///
/// Client errors are logged here at `warn` level; handlers do not need to log
/// them again before returning.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing required data")]
    MissingField,

    #[error("invalid JSON body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("invalid field value: {0}")]
    InvalidField(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::MissingField => {
                warn!("Request body is missing required fields");
                (StatusCode::BAD_REQUEST, "Missing required data")
            }
            AppError::InvalidBody(rejection) => {
                warn!(%rejection, "Request body could not be parsed");
                (StatusCode::BAD_REQUEST, "Invalid JSON body")
            }
            AppError::InvalidField(e) => {
                warn!(error = %e, "Request body has a field of the wrong type");
                (StatusCode::BAD_REQUEST, "Invalid JSON body")
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Convenience Result type alias that uses AppError as the error type.
pub type AppResult<T> = Result<T, AppError>;
