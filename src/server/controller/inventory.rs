use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, inventory::InventoryCaseDto},
    server::{
        controller::util::verify_id_token,
        error::{request::RequestError, Error},
        model::{
            app::AppState,
            request::{DeleteCaseRequest, TokenQuery},
        },
        service::inventory::InventoryService,
    },
};

pub static INVENTORY_TAG: &str = "inventory";

/// Case granted by the get case route
static GRANTED_CASE: (&str, i32) = ("Weapon Case", 1);

/// Grant the caller a Weapon Case
///
/// Callers that have never logged in are not granted anything but still receive a 200.
#[utoipa::path(
    get,
    path = "/api/getcase",
    tag = INVENTORY_TAG,
    params(TokenQuery),
    responses(
        (status = 200, description = "Case granted, empty body"),
        (status = 400, description = "idToken is missing", body = ErrorDto),
        (status = 401, description = "ID token could not be verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_case(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(RequestError::from)?;
    let id_token = query.id_token.required("idToken")?;

    let identity = verify_id_token(&state, &id_token).await?;

    let (case_name, quantity) = GRANTED_CASE;
    InventoryService::new(&state.db)
        .grant_case(&identity.uid, case_name, quantity)
        .await?;

    Ok(StatusCode::OK)
}

/// Get the caller's case totals
///
/// Quantities are summed over all of the caller's rows for each case; cases whose rows
/// hold no units are left out.
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = INVENTORY_TAG,
    params(TokenQuery),
    responses(
        (status = 200, description = "Case totals ordered by case name", body = Vec<InventoryCaseDto>),
        (status = 400, description = "idToken is missing", body = ErrorDto),
        (status = 401, description = "ID token could not be verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    query: Result<Query<TokenQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(RequestError::from)?;
    let id_token = query.id_token.required("idToken")?;

    let identity = verify_id_token(&state, &id_token).await?;

    let inventory = InventoryService::new(&state.db)
        .get_inventory(&identity.uid)
        .await?;

    Ok((StatusCode::OK, Json(inventory)))
}

/// Consume one unit of a case from the caller's inventory
///
/// Responds with whether a unit was removed. Unlike the other routes, malformed requests
/// and unverified tokens respond with a `false` body instead of an error object.
#[utoipa::path(
    delete,
    path = "/api/case",
    tag = INVENTORY_TAG,
    request_body = DeleteCaseRequest,
    responses(
        (status = 200, description = "Whether a unit of the case was removed", body = bool),
        (status = 400, description = "idToken or caseName is missing", body = bool),
        (status = 401, description = "ID token could not be verified", body = bool),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_case(
    State(state): State<AppState>,
    body: Result<Json<DeleteCaseRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    match consume_case(&state, body).await {
        Ok(removed) => Ok((StatusCode::OK, Json(removed))),
        Err(Error::RequestError(err)) => {
            tracing::debug!("{}", err);

            Ok((StatusCode::BAD_REQUEST, Json(false)))
        }
        Err(Error::AuthError(err)) => {
            err.log();

            Ok((StatusCode::UNAUTHORIZED, Json(false)))
        }
        Err(err) => Err(err),
    }
}

async fn consume_case(
    state: &AppState,
    body: Result<Json<DeleteCaseRequest>, JsonRejection>,
) -> Result<bool, Error> {
    let Json(body) = body.map_err(RequestError::from)?;
    let id_token = body.id_token.required("idToken")?;
    let case_name = body.case_name.required("caseName")?;

    let identity = verify_id_token(state, &id_token).await?;

    InventoryService::new(&state.db)
        .consume_case(&identity.uid, &case_name)
        .await
}
