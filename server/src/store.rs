//! Postgres-backed [`RecipeStore`].
//!
//! Diesel is synchronous, so every call checks out a pooled connection inside
//! `spawn_blocking`. Filters are translated clause by clause from
//! [`RecipeFilter`] and must keep the same meaning as `RecipeFilter::matches`.

use async_trait::async_trait;
use cuisine_core::{NewRecipe, Recipe, RecipeFilter, RecipeStore, StoreError};
use diesel::pg::Pg;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::{self, DbPool};
use crate::models::{column_int, NewRecipeRow, RecipeRow};
use crate::raw_sql::{self, TableExists};
use crate::schema::recipes;

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|e| {
                StoreError::Unavailable(format!("Database connection failed: {}", e))
            })?;
            f(&mut *conn)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("Database task failed: {}", e)))?
    }
}

fn query_failed(e: diesel::result::Error) -> StoreError {
    StoreError::Query(e.to_string())
}

fn filtered(filter: &RecipeFilter) -> recipes::BoxedQuery<'static, Pg> {
    let mut query = recipes::table.into_boxed();

    // ILIKE on title OR description
    if let Some(ref term) = filter.search {
        let pattern = raw_sql::contains_pattern(term);
        query = query.filter(
            recipes::title
                .ilike(pattern.clone())
                .or(recipes::description.ilike(pattern)),
        );
    }

    if let Some(ref cuisine) = filter.cuisine {
        query = query.filter(recipes::cuisine.eq(cuisine.clone()));
    }

    if let Some(min_rating) = filter.min_rating {
        query = query.filter(recipes::rating.ge(min_rating));
    }

    if let Some(max_time) = filter.max_time {
        query = query.filter(recipes::total_time.le(column_int(max_time)));
    }

    query
}

/// [`filtered`] in result order: rating descending, then id.
fn ranked(filter: &RecipeFilter) -> recipes::BoxedQuery<'static, Pg> {
    filtered(filter).order((recipes::rating.desc(), recipes::id.asc()))
}

#[async_trait]
impl RecipeStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, StoreError> {
        self.with_conn(|conn| {
            let rows: Vec<RecipeRow> = ranked(&RecipeFilter::default())
                .select(RecipeRow::as_select())
                .load(conn)
                .map_err(query_failed)?;
            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn count(&self, filter: &RecipeFilter) -> Result<u64, StoreError> {
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let count: i64 = filtered(&filter)
                .count()
                .get_result(conn)
                .map_err(query_failed)?;
            Ok(u64::try_from(count).unwrap_or(0))
        })
        .await
    }

    async fn fetch_range(
        &self,
        filter: &RecipeFilter,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Recipe>, StoreError> {
        let filter = filter.clone();
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        self.with_conn(move |conn| {
            let rows: Vec<RecipeRow> = ranked(&filter)
                .select(RecipeRow::as_select())
                .limit(i64::from(limit))
                .offset(offset)
                .load(conn)
                .map_err(query_failed)?;
            Ok(rows.into_iter().map(Recipe::from).collect())
        })
        .await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        // Ids are UUIDs here; anything else can't match a row
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        self.with_conn(move |conn| {
            let row: Option<RecipeRow> = recipes::table
                .filter(recipes::id.eq(id))
                .select(RecipeRow::as_select())
                .first(conn)
                .optional()
                .map_err(query_failed)?;
            Ok(row.map(Recipe::from))
        })
        .await
    }

    async fn cuisines(&self) -> Result<Vec<String>, StoreError> {
        self.with_conn(|conn| {
            recipes::table
                .select(recipes::cuisine)
                .distinct()
                .order(recipes::cuisine.asc())
                .load::<String>(conn)
                .map_err(query_failed)
        })
        .await
    }

    async fn schema_ready(&self) -> Result<bool, StoreError> {
        self.with_conn(|conn| {
            let probe: TableExists = diesel::sql_query(raw_sql::RECIPES_TABLE_EXISTS_QUERY)
                .get_result(conn)
                .map_err(query_failed)?;
            if !probe.table_exists {
                return Ok(false);
            }

            let count: i64 = recipes::table
                .count()
                .get_result(conn)
                .map_err(query_failed)?;
            Ok(count > 0)
        })
        .await
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            let applied = db::run_migrations(conn).map_err(StoreError::Bootstrap)?;
            if !applied.is_empty() {
                tracing::info!("Applied migrations: {}", applied.join(", "));
            }
            Ok(())
        })
        .await
    }

    async fn insert_seed(&self, records: &[NewRecipe]) -> Result<usize, StoreError> {
        let rows: Vec<NewRecipeRow> = records.iter().map(NewRecipeRow::from).collect();
        self.with_conn(move |conn| {
            diesel::insert_into(recipes::table)
                .values(&rows)
                .execute(conn)
                .map_err(|e| StoreError::Bootstrap(e.to_string()))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuisine_core::FilterSpec;
    use diesel::debug_query;

    fn full_filter() -> RecipeFilter {
        RecipeFilter::from(
            &FilterSpec::default()
                .with_search("100%")
                .with_cuisine("Indian")
                .with_min_rating(4.5)
                .with_max_time(45),
        )
    }

    #[test]
    fn test_page_query_translates_every_filter_field() {
        let query = ranked(&full_filter()).limit(10).offset(20);
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains(r#""recipes"."title" ILIKE $1"#), "{}", sql);
        assert!(sql.contains(" OR "), "{}", sql);
        assert!(sql.contains(r#""recipes"."description" ILIKE $2"#), "{}", sql);
        assert!(sql.contains(r#""recipes"."cuisine" = $3"#), "{}", sql);
        assert!(sql.contains(r#""recipes"."rating" >= $4"#), "{}", sql);
        assert!(sql.contains(r#""recipes"."total_time" <= $5"#), "{}", sql);
        assert!(
            sql.contains(r#"ORDER BY "recipes"."rating" DESC, "recipes"."id" ASC"#),
            "{}",
            sql
        );
        assert!(sql.contains("LIMIT $6 OFFSET $7"), "{}", sql);

        // Wildcards in the term are escaped before binding
        assert!(sql.contains(r#""%100\\%%""#), "{}", sql);
        assert!(sql.contains(r#""Indian""#), "{}", sql);
    }

    #[test]
    fn test_count_query_uses_same_filter() {
        let query = filtered(&full_filter()).count();
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(sql.contains("COUNT(*)"), "{}", sql);
        assert!(sql.contains(r#""recipes"."total_time" <= $5"#), "{}", sql);
        assert!(!sql.contains("ORDER BY"), "{}", sql);
    }

    #[test]
    fn test_empty_filter_has_no_where_clause() {
        let query = ranked(&RecipeFilter::default());
        let sql = debug_query::<Pg, _>(&query).to_string();

        assert!(!sql.contains("WHERE"), "{}", sql);
        assert!(sql.contains(r#"ORDER BY "recipes"."rating" DESC, "recipes"."id" ASC"#));
    }

    #[test]
    fn test_all_cuisines_sentinel_is_not_a_clause() {
        let filter = RecipeFilter::from(&FilterSpec::default().with_cuisine("all").with_search(""));
        let sql = debug_query::<Pg, _>(&filtered(&filter)).to_string();

        assert!(!sql.contains("WHERE"), "{}", sql);
    }
}
