//! Raw config types matching the JSON files (models.json, tables.json).

use serde::Deserialize;

/// One documented model: its type identifier and the table it is stored in.
#[derive(Clone, Debug, Deserialize)]
pub struct ModelConfig {
    pub id: String,
    /// Absent when the model type cannot report its table.
    #[serde(default)]
    pub table_name: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct TableConfig {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// All config types in one struct for in-memory loading.
/// `tables` is `None` when no table schemas are configured (no database).
#[derive(Clone, Debug, Default)]
pub struct FullConfig {
    pub models: Vec<ModelConfig>,
    pub tables: Option<Vec<TableConfig>>,
}
