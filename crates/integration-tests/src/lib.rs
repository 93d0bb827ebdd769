//! Integration tests for Recipe Roulette.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p recipe-roulette-integration-tests
//! ```
//!
//! Tests spawn the web application on an ephemeral port and drive it over
//! HTTP with `reqwest`. No external services are required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::Ipv4Addr;

use recipe_roulette_web::config::WebConfig;
use recipe_roulette_web::state::AppState;

/// A web application bound to an ephemeral port for the lifetime of a test.
pub struct TestServer {
    /// Base URL of the running server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
}

impl TestServer {
    /// Bind an ephemeral port and spawn the web application on it.
    ///
    /// The server task ends when the test runtime shuts down.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; no test can proceed without it.
    pub async fn spawn() -> Self {
        let config = WebConfig {
            host: Ipv4Addr::LOCALHOST.into(),
            port: 0,
            base_url: "http://localhost:3000".to_owned(),
            sentry_dsn: None,
        };
        let state = AppState::new(config);
        let app = recipe_roulette_web::app(state);

        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("listener has a local addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// URL for a path on the running server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
