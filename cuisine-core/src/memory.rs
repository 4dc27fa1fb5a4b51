//! In-process recipe store over an immutable dataset.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::error::StoreError;
use crate::filter::{compare_by_rating, compare_ids, RecipeFilter};
use crate::seed;
use crate::store::RecipeStore;
use crate::types::{NewRecipe, Recipe};

/// A fixed, pre-loaded set of recipes.
///
/// The dataset never changes after construction, so the store is always
/// "ready" and seeding is a no-op.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    recipes: Arc<[Recipe]>,
}

impl MemoryStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into(),
        }
    }

    /// Store holding the built-in sample recipes with ids `"0"`..`"4"`.
    pub fn with_seed_data() -> Self {
        Self::new(assign_ids(seed::sample_recipes()))
    }

    /// Parse a dataset in either of two layouts:
    /// - a JSON array of recipes
    /// - a JSON object keyed by position (`{"0": {...}, "1": {...}}`)
    ///
    /// Ids are assigned from the position in the dataset; any `id` in the
    /// input is overwritten.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| StoreError::InvalidData(e.to_string()))?;

        let entries = match value {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(map) => {
                let mut keyed: Vec<(String, serde_json::Value)> = map.into_iter().collect();
                // Numeric keys in numeric order, then the rest lexically
                keyed.sort_by(|(a, _), (b, _)| compare_ids(a, b));
                keyed.into_iter().map(|(_, v)| v).collect()
            }
            _ => {
                return Err(StoreError::InvalidData(
                    "expected a JSON array or object of recipes".to_string(),
                ))
            }
        };

        let recipes = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut recipe: Recipe = serde_json::from_value(entry)
                    .map_err(|e| StoreError::InvalidData(format!("recipe {}: {}", index, e)))?;
                recipe.id = index.to_string();
                Ok(recipe)
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        Ok(Self::new(recipes))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::InvalidData(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn matching(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        let mut matches: Vec<&Recipe> = self.recipes.iter().filter(|r| filter.matches(r)).collect();
        matches.sort_by(|a, b| compare_by_rating(a, b));
        matches
    }
}

fn assign_ids(records: Vec<NewRecipe>) -> Vec<Recipe> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_recipe(index.to_string()))
        .collect()
}

#[async_trait]
impl RecipeStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self.recipes.to_vec())
    }

    async fn count(&self, filter: &RecipeFilter) -> Result<u64, StoreError> {
        let count = self.recipes.iter().filter(|r| filter.matches(r)).count();
        Ok(count as u64)
    }

    async fn fetch_range(
        &self,
        filter: &RecipeFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Recipe>, StoreError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }

    async fn cuisines(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.recipes.iter().map(|r| r.cuisine.clone()).collect())
    }

    async fn schema_ready(&self) -> Result<bool, StoreError> {
        Ok(true)
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn insert_seed(&self, _records: &[NewRecipe]) -> Result<usize, StoreError> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_store_assigns_positional_ids() {
        let store = MemoryStore::with_seed_data();
        assert_eq!(store.len(), 5);
        let ids: Vec<_> = store.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_from_json_keyed_object_orders_numerically() {
        let json = r#"{
            "10": {"title": "Ten", "cuisine": "A", "rating": 1.0},
            "2": {"title": "Two", "cuisine": "B", "rating": 2.0},
            "0": {"title": "Zero", "cuisine": "C", "rating": 3.0, "Country_State": "X"}
        }"#;
        let store = MemoryStore::from_json_str(json).unwrap();
        let titles: Vec<_> = store.recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Zero", "Two", "Ten"]);
        assert_eq!(store.recipes[2].id, "2");
    }

    #[test]
    fn test_from_json_array_overwrites_ids() {
        let json = r#"[{"id": "abc", "title": "Only", "cuisine": "A", "rating": 4.0}]"#;
        let store = MemoryStore::from_json_str(json).unwrap();
        assert_eq!(store.recipes[0].id, "0");
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            MemoryStore::from_json_str("42"),
            Err(StoreError::InvalidData(_))
        ));
        assert!(matches!(
            MemoryStore::from_json_str(r#"[{"title": "No rating"}]"#),
            Err(StoreError::InvalidData(_))
        ));
        assert!(matches!(
            MemoryStore::from_json_str("not json"),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[tokio::test]
    async fn test_insert_seed_is_noop() {
        let store = MemoryStore::with_seed_data();
        let inserted = store.insert_seed(&seed::sample_recipes()).await.unwrap();
        assert_eq!(inserted, 0);
        assert_eq!(store.fetch_all().await.unwrap().len(), 5);
        assert!(store.schema_ready().await.unwrap());
    }

    #[tokio::test]
    async fn test_fetch_range_past_end_is_empty() {
        let store = MemoryStore::with_seed_data();
        let page = store
            .fetch_range(&RecipeFilter::default(), 50, 10)
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let store = MemoryStore::with_seed_data();
        let recipe = store.fetch_by_id("2").await.unwrap().unwrap();
        assert_eq!(recipe.title, "Pad Thai");
        assert!(store.fetch_by_id("99").await.unwrap().is_none());
    }
}
