pub mod cuisines;
pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Maximum page size accepted from clients
pub const MAX_PAGE_SIZE: u32 = 100;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/cuisines", get(cuisines::list_cuisines))
        .route("/{id}", get(get::get_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_recipes, cuisines::list_cuisines, get::get_recipe),
    components(schemas(cuisines::CuisinesResponse))
)]
pub struct ApiDoc;
