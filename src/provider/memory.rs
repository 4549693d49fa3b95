//! Provider backed entirely by loaded config: model registry plus configured table schemas.

use crate::config::{validate, FullConfig, ModelType, TableSchema};
use crate::error::ConfigError;
use crate::provider::{ModelRegistry, SchemaConnection, SchemaProvider};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct ConfigSchemaProvider {
    models: ModelRegistry,
    tables: Option<ConfigTables>,
}

#[derive(Clone, Debug, Default)]
struct ConfigTables {
    by_name: HashMap<String, TableSchema>,
}

impl ConfigSchemaProvider {
    /// Build from validated config. No `tables` in config means no connection.
    pub fn new(config: &FullConfig) -> Result<Self, ConfigError> {
        validate(config)?;
        let tables = config.tables.as_ref().map(|tables| ConfigTables {
            by_name: tables
                .iter()
                .map(|t| (t.name.clone(), TableSchema::from(t)))
                .collect(),
        });
        Ok(ConfigSchemaProvider {
            models: ModelRegistry::from_configs(&config.models),
            tables,
        })
    }
}

impl SchemaProvider for ConfigSchemaProvider {
    fn resolve_model(&self, identifier: &str) -> Option<ModelType> {
        self.models.get(identifier).cloned()
    }

    fn connection(&self) -> Option<&dyn SchemaConnection> {
        self.tables.as_ref().map(|t| t as &dyn SchemaConnection)
    }

    fn model_ids(&self) -> Vec<&str> {
        self.models.ids()
    }
}

impl SchemaConnection for ConfigTables {
    fn table_schema(&self, table: &str) -> Option<TableSchema> {
        self.by_name.get(table).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    #[test]
    fn resolves_registered_models_and_tables() {
        let config = parse_config(
            r#"[{"id": "app\\models\\Product", "table_name": "products"}]"#,
            Some(r#"[{"name": "products", "columns": [{"name": "id", "type": "int", "nullable": false}]}]"#),
        )
        .unwrap();
        let provider = ConfigSchemaProvider::new(&config).unwrap();

        let model = provider.resolve_model("app\\models\\Product").unwrap();
        assert_eq!(model.short_name, "Product");
        assert_eq!(model.table_name.as_deref(), Some("products"));
        assert!(provider.resolve_model("app\\models\\Missing").is_none());

        let conn = provider.connection().unwrap();
        assert_eq!(conn.table_schema("products").unwrap().columns.len(), 1);
        assert!(conn.table_schema("orders").is_none());
    }

    #[test]
    fn no_tables_means_no_connection() {
        let config = parse_config(r#"[{"id": "Product", "table_name": "products"}]"#, None).unwrap();
        let provider = ConfigSchemaProvider::new(&config).unwrap();
        assert!(provider.connection().is_none());
        assert_eq!(provider.model_ids(), vec!["Product"]);
    }
}
