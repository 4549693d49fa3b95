//! PostgreSQL provider: model registry from config, table schemas from a one-time
//! `information_schema` snapshot. Lookups after loading never touch the database.

use crate::config::{validate_models, ColumnDescriptor, ModelConfig, ModelType, TableSchema};
use crate::error::ConfigError;
use crate::provider::{ModelRegistry, SchemaConnection, SchemaProvider};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::collections::HashMap;

/// Schema introspected when none is given. From env `CRUD_DOCS_SCHEMA` in the CLI.
pub const DEFAULT_PG_SCHEMA: &str = "public";

/// Map a PostgreSQL `udt_name` onto the storage type vocabulary used for doc types.
/// Names without an equivalent pass through unchanged.
pub fn normalize_udt_name(udt: &str) -> &str {
    match udt {
        "int2" => "smallint",
        "int4" => "int",
        "int8" => "bigint",
        "float4" => "float",
        "float8" => "double",
        "numeric" => "decimal",
        "bpchar" => "char",
        "bool" => "boolean",
        "jsonb" => "json",
        "timestamptz" => "timestamp",
        "timetz" => "time",
        "bytea" => "blob",
        other => other,
    }
}

/// Tables and their columns as they were when the snapshot was taken.
#[derive(Clone, Debug, Default)]
pub struct PgSnapshot {
    tables: HashMap<String, TableSchema>,
}

impl PgSnapshot {
    /// Read every table and column of `schema`, columns in ordinal order.
    pub async fn load(pool: &PgPool, schema: &str) -> Result<Self, ConfigError> {
        let tables_sql = "SELECT table_name::text FROM information_schema.tables \
                          WHERE table_schema = $1";
        tracing::debug!(sql = %tables_sql, schema = %schema, "query");
        let names = sqlx::query_scalar::<_, String>(tables_sql)
            .bind(schema)
            .fetch_all(pool)
            .await?;

        let mut tables: HashMap<String, TableSchema> = names
            .into_iter()
            .map(|name| {
                let table = TableSchema {
                    name: name.clone(),
                    columns: Vec::new(),
                };
                (name, table)
            })
            .collect();

        let columns_sql = "SELECT table_name::text, column_name::text, udt_name::text, is_nullable::text \
                           FROM information_schema.columns \
                           WHERE table_schema = $1 \
                           ORDER BY table_name, ordinal_position";
        tracing::debug!(sql = %columns_sql, schema = %schema, "query");
        let rows = sqlx::query_as::<_, (String, String, String, String)>(columns_sql)
            .bind(schema)
            .fetch_all(pool)
            .await?;

        for (table, column, udt, is_nullable) in rows {
            let entry = tables.entry(table.clone()).or_insert_with(|| TableSchema {
                name: table,
                columns: Vec::new(),
            });
            entry.columns.push(ColumnDescriptor::new(
                column,
                normalize_udt_name(&udt),
                is_nullable == "YES",
            ));
        }
        Ok(PgSnapshot { tables })
    }

    pub fn from_tables(tables: impl IntoIterator<Item = TableSchema>) -> Self {
        PgSnapshot {
            tables: tables.into_iter().map(|t| (t.name.clone(), t)).collect(),
        }
    }
}

impl SchemaConnection for PgSnapshot {
    fn table_schema(&self, table: &str) -> Option<TableSchema> {
        self.tables.get(table).cloned()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PgSchemaProvider {
    models: ModelRegistry,
    snapshot: Option<PgSnapshot>,
}

impl PgSchemaProvider {
    /// Connect when a database URL is given and snapshot `schema`; without a URL the
    /// provider reports no connection.
    pub async fn connect(
        models: &[ModelConfig],
        database_url: Option<&str>,
        schema: &str,
    ) -> Result<Self, ConfigError> {
        validate_models(models)?;
        let Some(url) = database_url else {
            return Self::new(models, None);
        };
        let pool = PgPoolOptions::new().max_connections(1).connect(url).await?;
        let snapshot = PgSnapshot::load(&pool, schema).await;
        pool.close().await;
        Self::new(models, Some(snapshot?))
    }

    /// Snapshot `schema` through an existing pool.
    pub async fn from_pool(models: &[ModelConfig], pool: &PgPool, schema: &str) -> Result<Self, ConfigError> {
        validate_models(models)?;
        let snapshot = PgSnapshot::load(pool, schema).await?;
        Self::new(models, Some(snapshot))
    }

    /// Validates `models` before registering them.
    pub fn new(models: &[ModelConfig], snapshot: Option<PgSnapshot>) -> Result<Self, ConfigError> {
        validate_models(models)?;
        Ok(PgSchemaProvider {
            models: ModelRegistry::from_configs(models),
            snapshot,
        })
    }
}

impl SchemaProvider for PgSchemaProvider {
    fn resolve_model(&self, identifier: &str) -> Option<ModelType> {
        self.models.get(identifier).cloned()
    }

    fn connection(&self) -> Option<&dyn SchemaConnection> {
        self.snapshot.as_ref().map(|s| s as &dyn SchemaConnection)
    }

    fn model_ids(&self) -> Vec<&str> {
        self.models.ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("int2", "smallint")]
    #[case("int4", "int")]
    #[case("int8", "bigint")]
    #[case("float8", "double")]
    #[case("numeric", "decimal")]
    #[case("bool", "boolean")]
    #[case("jsonb", "json")]
    #[case("timestamptz", "timestamp")]
    #[case("bytea", "blob")]
    #[case("varchar", "varchar")]
    #[case("uuid", "uuid")]
    fn normalizes_udt_names(#[case] udt: &str, #[case] expected: &str) {
        assert_eq!(normalize_udt_name(udt), expected);
    }

    #[tokio::test]
    async fn without_url_has_no_connection() {
        let models = vec![ModelConfig {
            id: "Product".into(),
            table_name: Some("products".into()),
        }];
        let provider = PgSchemaProvider::connect(&models, None, DEFAULT_PG_SCHEMA)
            .await
            .unwrap();
        assert!(provider.connection().is_none());
        assert_eq!(provider.resolve_model("Product").unwrap().short_name, "Product");
    }

    #[test]
    fn snapshot_serves_tables() {
        let snapshot = PgSnapshot::from_tables([TableSchema {
            name: "products".into(),
            columns: vec![ColumnDescriptor::new("id", "int", false)],
        }]);
        let provider = PgSchemaProvider::new(&[], Some(snapshot)).unwrap();
        let conn = provider.connection().unwrap();
        assert_eq!(conn.table_schema("products").unwrap().columns[0].name, "id");
        assert!(conn.table_schema("orders").is_none());
    }

    #[test]
    fn rejects_invalid_models() {
        let models = vec![
            ModelConfig {
                id: "Product".into(),
                table_name: Some("products".into()),
            },
            ModelConfig {
                id: "Product".into(),
                table_name: Some("".into()),
            },
        ];
        let err = PgSchemaProvider::new(&models, None).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateModel(id) if id == "Product"));

        let err = PgSchemaProvider::new(&models[1..], None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[tokio::test]
    async fn connect_validates_before_connecting() {
        let models = vec![ModelConfig {
            id: "app\\models\\".into(),
            table_name: Some("products".into()),
        }];
        let err = PgSchemaProvider::connect(&models, Some("postgres://unreachable.invalid/db"), DEFAULT_PG_SCHEMA)
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
