//! One-time seeding of an empty store.
//!
//! Safe to run on every startup: a store that already holds recipes is left
//! alone. There is no lock around the check-then-insert; two processes
//! bootstrapping the same empty database at the same moment can both insert.
//!
//! Failures are logged and never returned. Callers keep running against
//! whatever state the store ends up in.

use crate::seed;
use crate::store::RecipeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The store already had data; nothing was written.
    AlreadyInitialized,
    /// Sample recipes were inserted (row count as reported by the store).
    Seeded(usize),
    /// The seed insert failed. Details are in the log.
    Failed,
}

pub async fn initialize(store: &dyn RecipeStore) -> BootstrapOutcome {
    let backend = store.backend_name();

    match store.schema_ready().await {
        Ok(true) => {
            tracing::info!(backend, "Recipe store already initialized");
            return BootstrapOutcome::AlreadyInitialized;
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(backend, "Could not check recipe store state, seeding anyway: {}", e);
        }
    }

    tracing::info!(backend, "Initializing recipe store");

    if let Err(e) = store.ensure_schema().await {
        // The insert below still runs; it fails on its own if the table is missing
        tracing::error!(backend, "Error creating recipe schema: {}", e);
    }

    match store.insert_seed(&seed::sample_recipes()).await {
        Ok(inserted) => {
            tracing::info!(backend, inserted, "Recipe store initialized successfully");
            BootstrapOutcome::Seeded(inserted)
        }
        Err(e) => {
            tracing::error!(backend, "Error inserting sample recipes: {}", e);
            BootstrapOutcome::Failed
        }
    }
}
