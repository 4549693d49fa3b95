//! Schema lookup capability injected into the generator.

mod memory;
mod postgres;

pub use memory::ConfigSchemaProvider;
pub use postgres::{normalize_udt_name, PgSchemaProvider, PgSnapshot, DEFAULT_PG_SCHEMA};

use crate::config::{ModelConfig, ModelType, TableSchema};
use std::collections::HashMap;

/// Resolves model identifiers and exposes the database connection holding their tables.
pub trait SchemaProvider {
    /// `None` when the identifier does not name a known model type.
    fn resolve_model(&self, identifier: &str) -> Option<ModelType>;

    /// `None` when no database connection is configured.
    fn connection(&self) -> Option<&dyn SchemaConnection>;

    /// Identifiers of every model this provider knows, sorted.
    fn model_ids(&self) -> Vec<&str>;
}

/// Table metadata reachable through a live (or snapshotted) connection.
pub trait SchemaConnection {
    /// `None` when the table does not exist.
    fn table_schema(&self, table: &str) -> Option<TableSchema>;
}

/// Model identifiers known to a provider, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
    by_id: HashMap<String, ModelType>,
}

impl ModelRegistry {
    pub fn from_configs(models: &[ModelConfig]) -> Self {
        ModelRegistry {
            by_id: models
                .iter()
                .map(|m| (m.id.clone(), ModelType::from(m)))
                .collect(),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&ModelType> {
        self.by_id.get(identifier)
    }

    /// All registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_id.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
