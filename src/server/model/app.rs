use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::identity::TokenVerifier;

/// Shared state injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub verifier: Arc<dyn TokenVerifier>,
}
