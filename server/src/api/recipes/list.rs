use super::MAX_PAGE_SIZE;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cuisine_core::{FilterSpec, QueryResult, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    /// 1-based page number (default: 1)
    pub page: Option<u32>,
    /// Number of recipes per page (default: 10, max: 100)
    pub limit: Option<u32>,
    /// Case-insensitive substring matched against title and description
    pub search: Option<String>,
    /// Exact cuisine name; "all" disables the filter
    pub cuisine: Option<String>,
    /// Minimum rating, inclusive. 0 keeps everything.
    pub min_rating: Option<f64>,
    /// Maximum total time in minutes, inclusive
    pub max_time: Option<u32>,
}

impl ListRecipesParams {
    /// Page and limit with defaults applied and limit clamped.
    fn cursor(&self) -> (u32, u32) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, limit)
    }

    fn into_filter(self) -> FilterSpec {
        let (page, limit) = self.cursor();
        FilterSpec {
            search: self.search,
            cuisine: self.cuisine,
            min_rating: self.min_rating,
            max_time: self.max_time,
            page: Some(page),
            limit: Some(limit),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "One page of recipes, best rated first", body = QueryResult),
        (status = 400, description = "Invalid parameters"),
        (status = 500, description = "Store failure; `error` is set and `data` is empty", body = QueryResult)
    )
)]
pub async fn list_recipes(
    State(engine): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let filter = params.into_filter();
    let result = engine.search(&filter).await;

    let status = if result.is_error() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    (status, Json(result)).into_response()
}
