use thiserror::Error;

/// Failures reported by a [`RecipeStore`](crate::store::RecipeStore) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Recipe store unavailable: {0}")]
    Unavailable(String),

    #[error("Recipe query failed: {0}")]
    Query(String),

    #[error("Database bootstrap failed: {0}")]
    Bootstrap(String),

    #[error("Invalid recipe data: {0}")]
    InvalidData(String),
}
