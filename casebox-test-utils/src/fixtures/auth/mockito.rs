//! Mock JWK endpoint.

use mockito::Mock;
use serde_json::json;

use crate::{
    constant::{TEST_JWK_PATH, TEST_KEY_ID},
    fixtures::auth::AuthFixtures,
};

impl<'a> AuthFixtures<'a> {
    /// Create the mock JWK endpoint serving the public half of the signing key.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times the endpoint is expected to be hit
    pub fn create_jwks_endpoint(&mut self, expected_requests: usize) -> Mock {
        let jwks = json!({
            "keys": [
                {
                    "kty": "RSA",
                    "alg": "RS256",
                    "use": "sig",
                    "kid": TEST_KEY_ID,
                    "n": self.setup.signing_key.n,
                    "e": self.setup.signing_key.e,
                }
            ]
        });

        self.setup
            .server
            .mock("GET", TEST_JWK_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("cache-control", "public, max-age=21600, must-revalidate")
            .with_body(jwks.to_string())
            .expect(expected_requests)
            .create()
    }
}
