//! Load config from JSON strings or from a directory holding models.json and tables.json.

use crate::config::{validate, FullConfig, ModelConfig, TableConfig};
use crate::error::ConfigError;
use std::path::Path;

pub const MODELS_FILE: &str = "models.json";
pub const TABLES_FILE: &str = "tables.json";

/// Parse and validate config. `tables_json` is `None` when no table schemas are configured.
pub fn parse_config(models_json: &str, tables_json: Option<&str>) -> Result<FullConfig, ConfigError> {
    let models: Vec<ModelConfig> =
        serde_json::from_str(models_json).map_err(|e| ConfigError::Load(format!("{}: {}", MODELS_FILE, e)))?;
    let tables = tables_json
        .map(|s| {
            serde_json::from_str::<Vec<TableConfig>>(s)
                .map_err(|e| ConfigError::Load(format!("{}: {}", TABLES_FILE, e)))
        })
        .transpose()?;
    let config = FullConfig { models, tables };
    validate(&config)?;
    Ok(config)
}

/// Load config from `dir`. models.json is required; tables.json is optional.
pub async fn load_from_dir(dir: impl AsRef<Path>) -> Result<FullConfig, ConfigError> {
    let dir = dir.as_ref();
    let models_path = dir.join(MODELS_FILE);
    tracing::debug!(path = %models_path.display(), "loading models");
    let models = tokio::fs::read_to_string(&models_path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", models_path.display(), e)))?;

    let tables_path = dir.join(TABLES_FILE);
    let tables = match tokio::fs::read_to_string(&tables_path).await {
        Ok(s) => Some(s),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(ConfigError::Load(format!("{}: {}", tables_path.display(), e))),
    };
    parse_config(&models, tables.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: &str = r#"[
        {"id": "app\\models\\Product", "table_name": "products"},
        {"id": "app\\models\\Legacy"}
    ]"#;

    const TABLES: &str = r#"[
        {"name": "products", "columns": [
            {"name": "id", "type": "int", "nullable": false},
            {"name": "name", "type": "varchar", "nullable": false},
            {"name": "photo", "type": "blob"}
        ]}
    ]"#;

    #[test]
    fn parses_models_and_tables() {
        let config = parse_config(MODELS, Some(TABLES)).unwrap();
        assert_eq!(config.models.len(), 2);
        assert_eq!(config.models[0].table_name.as_deref(), Some("products"));
        assert!(config.models[1].table_name.is_none());
        let tables = config.tables.unwrap();
        assert_eq!(tables[0].columns.len(), 3);
        assert!(!tables[0].columns[1].nullable);
        assert!(tables[0].columns[2].nullable);
    }

    #[test]
    fn malformed_json_is_load_error() {
        let err = parse_config("{", None).unwrap_err();
        assert!(matches!(err, ConfigError::Load(msg) if msg.starts_with(MODELS_FILE)));
    }

    #[tokio::test]
    async fn loads_directory_with_optional_tables() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MODELS_FILE), MODELS).unwrap();

        let config = load_from_dir(dir.path()).await.unwrap();
        assert!(config.tables.is_none());

        std::fs::write(dir.path().join(TABLES_FILE), TABLES).unwrap();
        let config = load_from_dir(dir.path()).await.unwrap();
        assert_eq!(config.tables.map(|t| t.len()), Some(1));
    }

    #[tokio::test]
    async fn missing_models_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_from_dir(dir.path()).await, Err(ConfigError::Load(_))));
    }
}
