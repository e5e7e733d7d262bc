use crate::server::{
    error::Error,
    identity::VerifiedIdentity,
    model::app::AppState,
};

/// Verifies the caller's ID token with the verifier held in the application state
///
/// # Returns
/// - `Ok(VerifiedIdentity)` - Token is valid, containing the caller's UID and email
/// - `Err(Error::AuthError)` - Token is empty, invalid, expired, or the signing keys could
///   not be fetched
pub async fn verify_id_token(state: &AppState, id_token: &str) -> Result<VerifiedIdentity, Error> {
    let identity = state.verifier.verify(id_token).await?;

    tracing::debug!(firebase_uid = %identity.uid, "Verified ID token");

    Ok(identity)
}
