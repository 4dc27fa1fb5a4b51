//! Filter, sort and paginate recipes on top of any [`RecipeStore`].

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::bootstrap::{self, BootstrapOutcome};
use crate::error::StoreError;
use crate::filter::RecipeFilter;
use crate::store::RecipeStore;
use crate::types::{FilterSpec, QueryResult, Recipe, DEFAULT_PAGE_SIZE};

/// Stateless query front-end over a recipe store.
///
/// Every call goes straight to the store, so results are as fresh as the store
/// at call time. Concurrent calls do not interact.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn RecipeStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn RecipeStore {
        self.store.as_ref()
    }

    /// Seed the store if it is empty. See [`bootstrap::initialize`].
    pub async fn bootstrap(&self) -> BootstrapOutcome {
        bootstrap::initialize(self.store.as_ref()).await
    }

    /// One page of recipes matching `filter`, best rated first.
    ///
    /// `page` is 1-based. A page past the end returns empty `data` with the
    /// real `count`. A zero `page` or `limit` is treated as 1. Store failures
    /// come back in `error` rather than as an `Err`.
    pub async fn query(&self, page: u32, limit: u32, filter: &FilterSpec) -> QueryResult {
        let page = page.max(1);
        let limit = limit.max(1);
        let filter = RecipeFilter::from(filter);

        match self.fetch_page(page, limit, &filter).await {
            Ok((data, count)) => QueryResult {
                data,
                count,
                page,
                total_pages: total_pages(count, limit),
                error: None,
            },
            Err(e) => {
                tracing::warn!(
                    backend = self.store.backend_name(),
                    page,
                    limit,
                    "Recipe query failed: {}",
                    e
                );
                QueryResult::failed(page, e.to_string())
            }
        }
    }

    /// Like [`query`](Self::query), taking the cursor from the filter itself
    /// (page 1 and 10 per page when unset).
    pub async fn search(&self, filter: &FilterSpec) -> QueryResult {
        let page = filter.page.unwrap_or(1);
        let limit = filter.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        self.query(page, limit, filter).await
    }

    /// Distinct non-blank cuisine labels, sorted.
    ///
    /// Returns an empty list when the store fails; the failure is only logged.
    pub async fn list_cuisines(&self) -> Vec<String> {
        match self.store.cuisines().await {
            Ok(labels) => labels
                .into_iter()
                .filter(|c| !c.trim().is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            Err(e) => {
                tracing::error!(
                    backend = self.store.backend_name(),
                    "Error fetching cuisines: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// Look up a single recipe. Store failures are logged and reported as `None`.
    pub async fn get_recipe(&self, id: &str) -> Option<Recipe> {
        match self.store.fetch_by_id(id).await {
            Ok(recipe) => recipe,
            Err(e) => {
                tracing::error!(
                    backend = self.store.backend_name(),
                    id,
                    "Error fetching recipe: {}",
                    e
                );
                None
            }
        }
    }

    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        filter: &RecipeFilter,
    ) -> Result<(Vec<Recipe>, u64), StoreError> {
        let count = self.store.count(filter).await?;
        let offset = page_offset(page, limit);

        // Skip the range fetch when the page is known to be empty
        let data = if offset >= count {
            Vec::new()
        } else {
            self.store.fetch_range(filter, offset, limit).await?
        };

        tracing::debug!(
            backend = self.store.backend_name(),
            page,
            limit,
            count,
            returned = data.len(),
            "Recipe query"
        );

        Ok((data, count))
    }
}

/// Zero-based row offset of a 1-based page.
pub fn page_offset(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// `ceil(count / limit)`, or 0 when there is nothing to show.
pub fn total_pages(count: u64, limit: u32) -> u32 {
    if count == 0 || limit == 0 {
        return 0;
    }
    let pages = count.div_ceil(u64::from(limit));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 2), 3);
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(3, 10), 20);
        assert_eq!(page_offset(0, 10), 0);
        // no overflow at the extremes
        assert!(page_offset(u32::MAX, u32::MAX) > u64::from(u32::MAX));
    }
}
