//! Typed errors for config loading and generator construction.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate model: {0}")]
    DuplicateModel(String),
    #[error("duplicate table: {0}")]
    DuplicateTable(String),
    #[error("duplicate column: table {table} column {column}")]
    DuplicateColumn { table: String, column: String },
    #[error("config load: {0}")]
    Load(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

/// Environment problems found while resolving a model's table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no database connection is configured")]
    NoConnection,
    #[error("table '{0}' does not exist")]
    TableNotFound(String),
    #[error("table '{0}' has no columns")]
    NoColumns(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocsError {
    #[error("unknown model: {0}")]
    UnknownModel(String),
    #[error("model {0} does not declare a table name")]
    UnsupportedModel(String),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
