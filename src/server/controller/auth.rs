use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::ErrorDto,
    server::{
        controller::util::verify_id_token,
        error::{request::RequestError, Error},
        model::{app::AppState, request::LoginRequest},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Log in with a Firebase ID token
///
/// Creates the user on first login and grants the starter cases (Weapon Case, Bravo Case,
/// and two Hydra Cases). The starter cases are granted again on every login.
///
/// A missing `idToken` is treated as an empty token and rejected as unauthorized.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Whether the user has administrator access", body = bool),
        (status = 400, description = "Body is not JSON or idToken is not a string", body = ErrorDto),
        (status = 401, description = "ID token could not be verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = body.map_err(RequestError::from)?;
    let id_token = body.id_token.or_empty("idToken")?;

    let identity = verify_id_token(&state, &id_token).await?;

    let administrator_access = AuthService::new(&state.db).login(&identity).await?;

    Ok((StatusCode::OK, Json(administrator_access)))
}
