//! Identity verification for incoming ID tokens.
//!
//! Controllers only depend on the [`TokenVerifier`] trait; the production implementation is
//! [`firebase::FirebaseVerifier`], which checks Firebase Authentication ID tokens against
//! Google's published signing keys.

pub mod firebase;

use async_trait::async_trait;

use crate::server::error::auth::AuthError;

/// The caller identity extracted from a verified ID token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Stable subject ID of the caller (the Firebase UID)
    pub uid: String,
    /// Email claim, absent for providers that do not supply one
    pub email: Option<String>,
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies the ID token, returning the caller identity or the reason it was rejected
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, AuthError>;
}
