//! Startup configuration from environment variables.
//!
//! - `RECIPE_BACKEND`: "memory" (default) | "postgres"
//! - `DATABASE_URL`: required for the postgres backend
//! - `RECIPES_JSON`: optional dataset file for the memory backend
//! - `BIND_ADDR`: listen address (default 0.0.0.0:3000)

use cuisine_core::{MemoryStore, RecipeStore, StoreError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::db;
use crate::store::PgStore;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown RECIPE_BACKEND: {0} (expected \"memory\" or \"postgres\")")]
    UnknownBackend(String),

    #[error("DATABASE_URL must be set when RECIPE_BACKEND=postgres")]
    MissingDatabaseUrl,

    #[error("Failed to load recipe dataset: {0}")]
    Dataset(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Static dataset from a JSON file, or the built-in sample recipes.
    Memory { dataset: Option<PathBuf> },
    Postgres { database_url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend_name = get("RECIPE_BACKEND").unwrap_or_else(|| "memory".to_string());
        let backend = match backend_name.to_lowercase().as_str() {
            "memory" => Backend::Memory {
                dataset: get("RECIPES_JSON").map(PathBuf::from),
            },
            "postgres" | "postgresql" => Backend::Postgres {
                database_url: get("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
            },
            _ => return Err(ConfigError::UnknownBackend(backend_name)),
        };

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self { backend, bind_addr })
    }
}

/// Construct the configured store.
///
/// The postgres pool is created lazily, so an unreachable database is not an
/// error here; it shows up on the first query instead.
pub fn create_store(backend: &Backend) -> Result<Arc<dyn RecipeStore>, ConfigError> {
    match backend {
        Backend::Memory { dataset: None } => {
            tracing::info!("Using in-memory recipe store with sample data");
            Ok(Arc::new(MemoryStore::with_seed_data()))
        }
        Backend::Memory {
            dataset: Some(path),
        } => {
            let store = MemoryStore::from_json_file(path)?;
            tracing::info!(
                "Using in-memory recipe store with {} recipes from {}",
                store.len(),
                path.display()
            );
            Ok(Arc::new(store))
        }
        Backend::Postgres { database_url } => {
            tracing::info!("Using postgres recipe store");
            Ok(Arc::new(PgStore::new(db::create_pool(database_url))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_memory_with_sample_data() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.backend, Backend::Memory { dataset: None });
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_memory_with_dataset() {
        let config = config_from(&[("RECIPES_JSON", "data/recipes.json")]).unwrap();
        assert_eq!(
            config.backend,
            Backend::Memory {
                dataset: Some(PathBuf::from("data/recipes.json"))
            }
        );
    }

    #[test]
    fn test_postgres_requires_database_url() {
        let err = config_from(&[("RECIPE_BACKEND", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));

        let err = config_from(&[("RECIPE_BACKEND", "postgres"), ("DATABASE_URL", "  ")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn test_postgres_backend() {
        let config = config_from(&[
            ("RECIPE_BACKEND", "Postgres"),
            ("DATABASE_URL", "postgres://localhost/recipes"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ])
        .unwrap();
        assert_eq!(
            config.backend,
            Backend::Postgres {
                database_url: "postgres://localhost/recipes".to_string()
            }
        );
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_unknown_backend() {
        let err = config_from(&[("RECIPE_BACKEND", "sqlite")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown RECIPE_BACKEND: sqlite (expected \"memory\" or \"postgres\")"
        );
    }

    #[test]
    fn test_missing_dataset_file_is_an_error() {
        let backend = Backend::Memory {
            dataset: Some(PathBuf::from("/nonexistent/recipes.json")),
        };
        assert!(matches!(
            create_store(&backend),
            Err(ConfigError::Dataset(StoreError::InvalidData(_)))
        ));
    }
}
