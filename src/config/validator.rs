//! Config validation: unique models, tables and columns; no empty names.

use crate::case::short_name;
use crate::config::{FullConfig, ModelConfig, TableConfig};
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(config: &FullConfig) -> Result<(), ConfigError> {
    validate_models(&config.models)?;
    if let Some(tables) = &config.tables {
        validate_tables(tables)?;
    }
    Ok(())
}

/// Model ids must be unique and end in a non-empty display name; table names must not be blank.
pub fn validate_models(models: &[ModelConfig]) -> Result<(), ConfigError> {
    let mut model_ids = HashSet::new();
    for m in models {
        if m.id.trim().is_empty() {
            return Err(ConfigError::Validation("model id must not be empty".into()));
        }
        if short_name(&m.id).trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "model id {} has no display name after its last separator",
                m.id
            )));
        }
        if !model_ids.insert(m.id.as_str()) {
            return Err(ConfigError::DuplicateModel(m.id.clone()));
        }
        if let Some(table) = &m.table_name {
            if table.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "model {} has an empty table_name",
                    m.id
                )));
            }
        }
    }
    Ok(())
}

fn validate_tables(tables: &[TableConfig]) -> Result<(), ConfigError> {
    let mut table_names = HashSet::new();
    for t in tables {
        if t.name.trim().is_empty() {
            return Err(ConfigError::Validation("table name must not be empty".into()));
        }
        if !table_names.insert(t.name.as_str()) {
            return Err(ConfigError::DuplicateTable(t.name.clone()));
        }
        let mut column_names = HashSet::new();
        for c in &t.columns {
            if c.name.trim().is_empty() || c.type_.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "table {} has a column with an empty name or type",
                    t.name
                )));
            }
            if !column_names.insert(c.name.as_str()) {
                return Err(ConfigError::DuplicateColumn {
                    table: t.name.clone(),
                    column: c.name.clone(),
                });
            }
        }
    }

    Ok(())
}
