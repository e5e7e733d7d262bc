use casebox::server::{config::Config, error::Error, model::app::AppState, router, startup};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let verifier = startup::build_token_verifier(&config)?;

    let app = router::routes(&config.frontend_dir).with_state(AppState { db, verifier });

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
