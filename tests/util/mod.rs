//! Helpers for building application state and reading responses in integration tests

use std::sync::Arc;

use axum::{body::to_bytes, response::Response};
use casebox::server::{identity::firebase::FirebaseVerifier, model::app::AppState};
use casebox_test_utils::{constant::TEST_PROJECT_ID, TestContext};

/// Extension trait for TestContext to create AppState verifying against the mock JWK endpoint
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            verifier: Arc::new(
                FirebaseVerifier::new(TEST_PROJECT_ID, self.jwk_url())
                    .expect("Failed to build ID token verifier"),
            ),
        }
    }
}

/// Reads the response body as JSON
pub async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
