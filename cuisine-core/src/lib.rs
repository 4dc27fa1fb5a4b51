pub mod bootstrap;
pub mod error;
pub mod filter;
pub mod memory;
pub mod query;
pub mod seed;
pub mod store;
pub mod types;

pub use bootstrap::BootstrapOutcome;
pub use error::StoreError;
pub use filter::{compare_by_rating, compare_ids, RecipeFilter};
pub use memory::MemoryStore;
pub use query::QueryEngine;
pub use store::RecipeStore;
pub use types::{
    FilterSpec, Ingredient, Instruction, NewRecipe, QueryResult, Recipe, ALL_CUISINES,
    DEFAULT_PAGE_SIZE,
};
