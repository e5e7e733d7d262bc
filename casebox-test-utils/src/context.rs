//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context owns an in-memory SQLite database, a mock HTTP server that stands in for
//! Google's JWK endpoint, and a freshly generated RSA key used to sign test ID tokens.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::EncodingKey;
use mockito::{Mock, Server, ServerGuard};
use openssl::rsa::Rsa;
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_JWK_PATH, error::TestError};

/// RSA key pair used to sign ID tokens, with the public half in JWK form
pub(crate) struct SigningKey {
    pub(crate) encoding_key: EncodingKey,
    /// Base64URL encoded modulus
    pub(crate) n: String,
    /// Base64URL encoded public exponent
    pub(crate) e: String,
}

impl SigningKey {
    fn generate() -> Result<Self, TestError> {
        let rsa = Rsa::generate(2048)?;
        let encoding_key = EncodingKey::from_rsa_pem(&rsa.private_key_to_pem()?)?;

        Ok(Self {
            encoding_key,
            n: URL_SAFE_NO_PAD.encode(rsa.n().to_vec()),
            e: URL_SAFE_NO_PAD.encode(rsa.e().to_vec()),
        })
    }
}

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_inventory_tables()
///     .with_starter_cases()
///     .with_jwks_endpoint(1)
///     .build()
///     .await?;
///
/// let token = test.auth().id_token("u1", Some("a@b.com"));
/// let verifier = FirebaseVerifier::new(TEST_PROJECT_ID, test.jwk_url())?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for the JWK endpoint
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
    pub(crate) signing_key: SigningKey,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;
        let signing_key = SigningKey::generate()?;

        Ok(Self {
            db,
            server,
            mocks: Vec::new(),
            signing_key,
        })
    }

    pub(crate) async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// URL of the mock JWK endpoint, pass it to the verifier under test
    pub fn jwk_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_JWK_PATH)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
