use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    identity::{firebase::FirebaseVerifier, TokenVerifier},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the ID token verifier for the configured Firebase project
pub fn build_token_verifier(config: &Config) -> Result<Arc<dyn TokenVerifier>, Error> {
    let verifier = FirebaseVerifier::new(
        config.firebase_project_id.clone(),
        config.firebase_jwk_url.clone(),
    )?;

    Ok(Arc::new(verifier))
}
