//! # Quiz Battle - Turn Resolution Service
//!
//! A stateless HTTP backend for a quiz battle: each answered question deals one
//! point of damage to either the boss or the player.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`models`] - Request and response types
//! - [`services`] - Battle rules
//! - [`utils`] - Constants and env-backed configuration

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{health_check, resolve_battle_turn};

/// Creates the Axum router with all application routes.
///
/// Cross-origin requests are accepted from any origin, since the front-end
/// is hosted separately from this service.
pub fn app() -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/api/battle/resolve-turn", post(resolve_battle_turn))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
