use thiserror::Error;

/// Raised while reading [`Config`](crate::server::config::Config) at startup, before any
/// request is served
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
