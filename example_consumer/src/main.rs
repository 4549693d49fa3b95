//! Example consumer: a separate Rust project that uses crud-docs as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Set `DATABASE_URL` to read the table from PostgreSQL; otherwise an inline table is used.

use crud_docs::config::ModelConfig;
use crud_docs::{parse_config, ConfigSchemaProvider, DocsGenerator, PgSchemaProvider, DEFAULT_PG_SCHEMA};

const MODEL_ID: &str = "app\\models\\Product";

const MODELS: &str = r#"[{"id": "app\\models\\Product", "table_name": "products"}]"#;

const TABLES: &str = r#"[
    {"name": "products", "columns": [
        {"name": "id", "type": "int", "nullable": false},
        {"name": "name", "type": "varchar", "nullable": false},
        {"name": "price", "type": "decimal", "nullable": false},
        {"name": "photo", "type": "blob"},
        {"name": "created_at", "type": "datetime"}
    ]}
]"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crud_docs=debug")),
        )
        .init();

    let docs = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(1)
                .connect(&database_url)
                .await?;
            let models = vec![ModelConfig {
                id: MODEL_ID.into(),
                table_name: Some("products".into()),
            }];
            let provider = PgSchemaProvider::from_pool(&models, &pool, DEFAULT_PG_SCHEMA).await?;
            DocsGenerator::new(&provider, MODEL_ID)?.generate_crud_docs()
        }
        Err(_) => {
            let config = parse_config(MODELS, Some(TABLES))?;
            let provider = ConfigSchemaProvider::new(&config)?;
            DocsGenerator::new(&provider, MODEL_ID)?.generate_crud_docs()
        }
    };
    tracing::info!(model = MODEL_ID, bytes = docs.len(), "generated docs");
    print!("{}", docs);
    Ok(())
}
