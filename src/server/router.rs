//! HTTP routing and OpenAPI documentation configuration.
//!
//! API endpoints are registered with their OpenAPI specifications through utoipa, Swagger UI
//! is served at `/api/docs`, and the built frontend is served from disk.

use std::path::Path;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `POST /api/login` - Log in and receive the administrator flag
/// - `GET /api/getcase` - Grant the caller a Weapon Case
/// - `GET /api/inventory` - Get the caller's case totals
/// - `DELETE /api/case` - Consume one unit of a case
/// - `GET /api/items` - List the items of a case
/// - `GET /api/docs` - Swagger UI, with the OpenAPI document at `/api/docs/openapi.json`
/// - `GET /` - The frontend's `index.html`
/// - `GET /main/*` - Static frontend assets
///
/// # Arguments
/// - `frontend_dir` - Directory of the built frontend
pub fn routes(frontend_dir: &Path) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Casebox", description = "Casebox API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Login routes"),
        (name = controller::inventory::INVENTORY_TAG, description = "Case inventory routes"),
        (name = controller::item::ITEM_TAG, description = "Case item routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::inventory::get_case))
        .routes(routes!(controller::inventory::get_inventory))
        .routes(routes!(controller::inventory::delete_case))
        .routes(routes!(controller::item::get_items))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
        .nest_service("/main", ServeDir::new(frontend_dir))
        .layer(TraceLayer::new_for_http())
}
