//! Resolved model metadata: what providers hand back and what the generator keeps.

use crate::case::short_name;
use crate::config::{ColumnConfig, ModelConfig, TableConfig};

/// Primary-key column every documented table is expected to carry.
pub const ID_COLUMN: &str = "id";

/// A model type as resolved from its identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelType {
    pub identifier: String,
    /// Display name used in titles and tags (e.g. "Product").
    pub short_name: String,
    /// `None` when the type has no way to report its table.
    pub table_name: Option<String>,
}

impl ModelType {
    pub fn new(identifier: impl Into<String>, table_name: Option<String>) -> Self {
        let identifier = identifier.into();
        ModelType {
            short_name: short_name(&identifier).to_string(),
            identifier,
            table_name,
        }
    }
}

impl From<&ModelConfig> for ModelType {
    fn from(m: &ModelConfig) -> Self {
        ModelType::new(m.id.clone(), m.table_name.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Raw storage type name (e.g. "int", "varchar", "datetime", "blob").
    pub storage_type: String,
    pub allow_null: bool,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, storage_type: impl Into<String>, allow_null: bool) -> Self {
        ColumnDescriptor {
            name: name.into(),
            storage_type: storage_type.into(),
            allow_null,
        }
    }

    pub fn is_id(&self) -> bool {
        self.name == ID_COLUMN
    }

    pub fn is_required(&self) -> bool {
        !self.allow_null
    }
}

impl From<&ColumnConfig> for ColumnDescriptor {
    fn from(c: &ColumnConfig) -> Self {
        ColumnDescriptor::new(c.name.clone(), c.type_.clone(), c.nullable)
    }
}

/// Columns of one table, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl From<&TableConfig> for TableSchema {
    fn from(t: &TableConfig) -> Self {
        TableSchema {
            name: t.name.clone(),
            columns: t.columns.iter().map(ColumnDescriptor::from).collect(),
        }
    }
}

/// Everything the generator needs about one model. Built once, never mutated.
#[derive(Clone, Debug)]
pub struct ModelDescriptor {
    pub identifier: String,
    pub model_name: String,
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl ModelDescriptor {
    /// Columns that appear in generated property listings (everything except `id`).
    pub fn data_columns(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| !c.is_id())
    }

    /// Names of non-`id` columns that do not accept NULL.
    pub fn required_columns(&self) -> Vec<&str> {
        self.data_columns()
            .filter(|c| c.is_required())
            .map(|c| c.name.as_str())
            .collect()
    }
}
