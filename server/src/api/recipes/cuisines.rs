use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CuisinesResponse {
    /// Distinct cuisine names across all recipes, sorted alphabetically
    pub cuisines: Vec<String>,
}

/// Always 200. An empty list can also mean the store was unreachable; the
/// failure is logged server-side.
#[utoipa::path(
    get,
    path = "/api/recipes/cuisines",
    tag = "recipes",
    responses(
        (status = 200, description = "List of distinct cuisines", body = CuisinesResponse)
    )
)]
pub async fn list_cuisines(State(engine): State<AppState>) -> impl IntoResponse {
    Json(CuisinesResponse {
        cuisines: engine.list_cuisines().await,
    })
}
