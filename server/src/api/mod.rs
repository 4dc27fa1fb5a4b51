pub mod health;
pub mod recipes;

use axum::Router;
use cuisine_core::{FilterSpec, Ingredient, Instruction, QueryResult, Recipe};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// All API routes, with state attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/health", health::router())
        .nest("/api/recipes", recipes::router())
        .with_state(state)
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Cuisine Share", description = "Browse and filter recipes"),
        components(schemas(
            ErrorResponse,
            Recipe,
            Ingredient,
            Instruction,
            QueryResult,
            FilterSpec
        ))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> =
        vec![health::ApiDoc::openapi(), recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
