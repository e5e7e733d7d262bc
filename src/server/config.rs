use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::server::error::config::ConfigError;

/// Google's published JWKS for Firebase ID token signing keys
pub static DEFAULT_FIREBASE_JWK_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

static DEFAULT_DB_HOST: &str = "localhost";
static DEFAULT_PORT: u16 = 8080;
static DEFAULT_FRONTEND_DIR: &str = "./frontend";

pub struct Config {
    pub database_url: String,
    pub firebase_project_id: String,
    pub firebase_jwk_url: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

/// Only the field needed to verify ID tokens is read from the service account key
#[derive(Deserialize)]
struct ServiceAccount {
    project_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{:?} is not a valid port", port),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: database_url(&lookup)?,
            firebase_project_id: firebase_project_id(&lookup)?,
            firebase_jwk_url: lookup("FIREBASE_JWK_URL")
                .unwrap_or_else(|| DEFAULT_FIREBASE_JWK_URL.to_string()),
            port,
            frontend_dir: lookup("FRONTEND_DIR")
                .unwrap_or_else(|| DEFAULT_FRONTEND_DIR.to_string())
                .into(),
        })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// `DATABASE_URL` wins, otherwise a Postgres URL is assembled from the `DB_*` variables
fn database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
    let name = required(lookup, "DB_NAME")?;
    let user = required(lookup, "DB_USER")?;
    let password = required(lookup, "DB_PASSWORD")?;

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason,
    };

    let mut url = Url::parse(&format!("postgres://{}", host))
        .map_err(|e| invalid("DB_HOST", e.to_string()))?;
    url.set_username(&user)
        .map_err(|_| invalid("DB_USER", "cannot be used as a URL username".to_string()))?;
    url.set_password(Some(&password))
        .map_err(|_| invalid("DB_PASSWORD", "cannot be used as a URL password".to_string()))?;
    url.set_path(&name);

    Ok(url.to_string())
}

/// Reads the project ID from the inline service account key, or from the key file
fn firebase_project_id<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (var, contents) = match lookup("SERVICE_ACCOUNT_KEY") {
        Some(inline) => ("SERVICE_ACCOUNT_KEY", inline),
        None => {
            let path = lookup("SERVICE_ACCOUNT_KEY_PATH")
                .ok_or_else(|| ConfigError::MissingEnvVar("SERVICE_ACCOUNT_KEY".to_string()))?;
            let contents =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::InvalidEnvValue {
                    var: "SERVICE_ACCOUNT_KEY_PATH".to_string(),
                    reason: format!("failed to read {}: {}", path, e),
                })?;

            ("SERVICE_ACCOUNT_KEY_PATH", contents)
        }
    };

    let service_account: ServiceAccount =
        serde_json::from_str(&contents).map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

    if service_account.project_id.is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "project_id is empty".to_string(),
        });
    }

    Ok(service_account.project_id)
}
