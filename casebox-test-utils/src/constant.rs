//! Constant values shared by tests.
//!
//! None of these are real credentials.

/// Firebase project ID used as the audience of test ID tokens
pub static TEST_PROJECT_ID: &str = "casebox-test";

/// Path of the mock JWK endpoint on the mock server
pub static TEST_JWK_PATH: &str = "/oauth/jwks";

/// Key ID of the generated signing key
pub static TEST_KEY_ID: &str = "casebox-test-key-1";

/// Image path given to case and item fixtures
pub static TEST_IMAGE_PATH: &str = "/main/images/test.png";

/// Starter cases and the quantity granted for each on login
pub static STARTER_CASES: [(&str, i32); 3] =
    [("Weapon Case", 1), ("Bravo Case", 1), ("Hydra Case", 2)];
