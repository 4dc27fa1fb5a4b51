//! Raw SQL that Diesel's DSL can't express, plus LIKE pattern building.
//!
//! # Safety
//!
//! Nothing here interpolates user input into SQL text. Search terms reach the
//! database only as bound parameters, after LIKE metacharacters are escaped.

use diesel::sql_types::Bool;
use diesel::QueryableByName;

/// Whether the `recipes` table exists in the current search path.
///
/// `to_regclass` returns NULL instead of raising for a missing relation, so the
/// probe works before migrations have run.
pub const RECIPES_TABLE_EXISTS_QUERY: &str =
    "SELECT to_regclass('recipes') IS NOT NULL AS table_exists";

#[derive(QueryableByName, Debug)]
pub struct TableExists {
    #[diesel(sql_type = Bool)]
    pub table_exists: bool,
}

/// `%term%` with `\`, `%` and `_` escaped, for use with `ILIKE`.
pub fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}
