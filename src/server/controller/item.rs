use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, inventory::ItemDto},
    server::{
        controller::util::verify_id_token,
        error::{request::RequestError, Error},
        model::{app::AppState, request::ItemsQuery},
        service::item::ItemService,
    },
};

pub static ITEM_TAG: &str = "item";

/// List the items that can be drawn from a case
///
/// Any authenticated caller may list the items of any case. Unknown cases return an empty
/// list.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    params(ItemsQuery),
    responses(
        (status = 200, description = "Items of the case ordered by ID", body = Vec<ItemDto>),
        (status = 400, description = "idToken or caseName is missing", body = ErrorDto),
        (status = 401, description = "ID token could not be verified", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    query: Result<Query<ItemsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query.map_err(RequestError::from)?;
    let id_token = query.id_token.required("idToken")?;
    let case_name = query.case_name.required("caseName")?;

    verify_id_token(&state, &id_token).await?;

    let items = ItemService::new(&state.db)
        .get_items_for_case(&case_name)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}
