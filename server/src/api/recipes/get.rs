use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cuisine_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(engine): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match engine.get_recipe(&id).await {
        Some(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::api::recipes::test_support::{down_state, get_json, seed_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_get_recipe() {
        let (status, body) = get_json(seed_state(), "/api/recipes/3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Beef Tacos");
        assert_eq!(body["cuisine"], "Mexican");
        assert_eq!(body["ingredients"][0]["name"], "Ground Beef");
        assert_eq!(body["instructions"][3]["instruction"], "Assemble tacos with toppings");
        assert_eq!(body["nutrients"]["protein"], "25g");
    }

    #[tokio::test]
    async fn test_get_recipe_not_found() {
        let (status, body) = get_json(seed_state(), "/api/recipes/42").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Recipe not found");
    }

    #[tokio::test]
    async fn test_get_recipe_store_down_is_not_found() {
        let (status, _) = get_json(down_state(), "/api/recipes/3").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
