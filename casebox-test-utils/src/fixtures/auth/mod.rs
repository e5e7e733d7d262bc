pub mod factory;
pub mod mockito;

use jsonwebtoken::{encode, Algorithm, Header};

use crate::{constant::TEST_KEY_ID, fixtures::auth::factory::MockIdTokenClaims, TestContext};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Sign a valid ID token for the UID, signed with the key served by the JWK endpoint
    pub fn id_token(&self, uid: &str, email: Option<&str>) -> String {
        self.sign_id_token(&factory::mock_id_token_claims(uid, email))
    }

    /// Sign arbitrary claims with the test key
    pub fn sign_id_token(&self, claims: &MockIdTokenClaims) -> String {
        self.sign_id_token_with_key_id(claims, TEST_KEY_ID)
    }

    /// Sign claims with the test key but advertise a different key ID in the header
    pub fn sign_id_token_with_key_id(&self, claims: &MockIdTokenClaims, key_id: &str) -> String {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(key_id.to_string());

        encode(&header, claims, &self.setup.signing_key.encoding_key)
            .expect("Failed to encode ID token")
    }
}
