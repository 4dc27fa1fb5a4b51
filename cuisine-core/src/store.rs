//! Backend abstraction for recipe storage.
//!
//! Two implementations exist: [`MemoryStore`](crate::memory::MemoryStore) over a
//! fixed dataset, and the Postgres store in the server crate. Both must agree
//! on filter semantics (see [`RecipeFilter`]) and ordering (see
//! [`compare_by_rating`](crate::filter::compare_by_rating)).

use async_trait::async_trait;

use crate::error::StoreError;
use crate::filter::RecipeFilter;
use crate::types::{NewRecipe, Recipe};

/// Read-mostly access to a collection of recipes.
///
/// Failures are returned as [`StoreError`]; implementations must not panic on
/// I/O problems.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Short backend name for logs (e.g. "memory", "postgres").
    fn backend_name(&self) -> &'static str;

    async fn fetch_all(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Number of recipes matching `filter`, ignoring pagination.
    async fn count(&self, filter: &RecipeFilter) -> Result<u64, StoreError>;

    /// Matching recipes, sorted by rating descending, sliced to `[offset, offset + limit)`.
    /// An offset past the end yields an empty vec.
    async fn fetch_range(
        &self,
        filter: &RecipeFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Recipe>, StoreError>;

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// Cuisine label of every recipe, possibly with duplicates and blanks.
    async fn cuisines(&self) -> Result<Vec<String>, StoreError> {
        let recipes = self.fetch_all().await?;
        Ok(recipes.into_iter().map(|r| r.cuisine).collect())
    }

    /// True when the backing table exists and holds at least one recipe.
    async fn schema_ready(&self) -> Result<bool, StoreError>;

    /// Create tables and indexes if the backend needs them.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    /// Bulk insert. Returns the number of rows written.
    async fn insert_seed(&self, records: &[NewRecipe]) -> Result<usize, StoreError>;
}
