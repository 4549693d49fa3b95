//! crud-docs: OpenAPI annotation text for the CRUD endpoints of database-backed models.

pub mod case;
pub mod config;
pub mod docs;
pub mod error;
pub mod provider;

pub use config::{
    load_from_dir, parse_config, ColumnDescriptor, FullConfig, ModelDescriptor, ModelType, TableSchema,
};
pub use docs::{generate_for_models, DocsGenerator};
pub use error::{ConfigError, ConfigurationError, DocsError};
pub use provider::{
    ConfigSchemaProvider, PgSchemaProvider, PgSnapshot, SchemaConnection, SchemaProvider, DEFAULT_PG_SCHEMA,
};
