#![allow(dead_code)]

use std::sync::Once;

use reqwest::Response;
use serde_json::Value;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("quiz_battle=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    init_tracing_once();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, quiz_battle::app()).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Posts `body` as JSON to the resolve-turn endpoint.
pub async fn post_turn(client: &reqwest::Client, address: &str, body: &Value) -> Response {
    client
        .post(format!("{address}/api/battle/resolve-turn"))
        .json(body)
        .send()
        .await
        .expect("Failed to execute request")
}
