//! Factory functions for ID token claims.

use chrono::Utc;
use serde::Serialize;

use crate::constant::TEST_PROJECT_ID;

/// Claims carried by a Firebase ID token, with public fields so tests can corrupt them
#[derive(Clone, Debug, Serialize)]
pub struct MockIdTokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub auth_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Create valid ID token claims for the test project.
///
/// The token was issued now and expires in one hour, matching Firebase's token lifetime.
pub fn mock_id_token_claims(uid: &str, email: Option<&str>) -> MockIdTokenClaims {
    let now = Utc::now().timestamp();

    MockIdTokenClaims {
        iss: format!("https://securetoken.google.com/{}", TEST_PROJECT_ID),
        aud: TEST_PROJECT_ID.to_string(),
        sub: uid.to_string(),
        iat: now,
        exp: now + 3600,
        auth_time: now,
        email: email.map(str::to_string),
    }
}
