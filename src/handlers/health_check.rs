//! # Health Check Handler
//!
//! Lets load balancers and deployment tooling verify that the service is up.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Always returns `200 OK` with an empty body.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
