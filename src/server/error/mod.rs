//! Error types for the Casebox server.
//!
//! Each domain gets its own `thiserror` enum (configuration, authentication, malformed
//! requests) and all of them are aggregated into [`Error`]. Every error implements
//! `IntoResponse` so controllers can return them directly with `?`.

pub mod auth;
pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, request::RequestError},
};

/// Main error type for the Casebox server.
///
/// Uses `#[from]` so domain errors and library errors convert with `?`. Store failures and
/// startup errors are reported to the caller as a generic 500 while the details are logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (ID token missing, invalid, expired, or keys unavailable).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Malformed request (missing or wrongly typed field).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// HTTP client error while building the ID token key fetcher.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding the listener or serving requests.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps errors to HTTP responses.
///
/// - 400 Bad Request - malformed request
/// - 401 Unauthorized - ID token could not be verified
/// - 500 Internal Server Error - everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
