use std::env;
use std::sync::LazyLock;

use tracing::warn;

use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT};

/// Interface the server binds to, read from `APP_HOST`.
pub static APP_HOST: LazyLock<String> = LazyLock::new(|| {
    env::var("APP_HOST").unwrap_or_else(|_| {
        warn!("Missing APP_HOST env var, using fallback '{DEFAULT_HOST}'");
        DEFAULT_HOST.to_string()
    })
});

/// Port the server listens on, read from `APP_PORT`.
pub static APP_PORT: LazyLock<u16> = LazyLock::new(|| {
    env::var("APP_PORT")
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or_else(|| {
            warn!("Invalid or missing APP_PORT env var, using fallback {DEFAULT_PORT}");
            DEFAULT_PORT
        })
});

/// Socket address built from [`APP_HOST`] and [`APP_PORT`], e.g. `0.0.0.0:5000`.
pub fn bind_address() -> String {
    format!("{}:{}", *APP_HOST, *APP_PORT)
}
