use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("ID token is empty")]
    EmptyToken,
    #[error("ID token header does not contain a key ID")]
    MissingKeyId,
    #[error("ID token was signed with unknown key ID {0:?}")]
    UnknownKeyId(String),
    #[error("ID token subject must be a non-empty string of at most 128 characters")]
    InvalidSubject,
    #[error("ID token claim {0} is in the future")]
    IssuedInFuture(&'static str),
    #[error("Failed to validate ID token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Failed to fetch ID token signing keys: {0}")]
    KeyFetchFailed(#[from] reqwest::Error),
}

impl AuthError {
    /// Logs the rejection at debug level, or at warn level for key fetch failures
    pub fn log(&self) {
        match self {
            Self::KeyFetchFailed(_) => tracing::warn!("{}", self),
            _ => tracing::debug!("{}", self),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
