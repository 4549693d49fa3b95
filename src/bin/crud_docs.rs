//! crud-docs CLI: loads model config, resolves table schemas from PostgreSQL (when
//! `DATABASE_URL` is set) or from the config's tables.json, and prints the docs.

use clap::Parser;
use crud_docs::{
    generate_for_models, load_from_dir, ConfigSchemaProvider, PgSchemaProvider, SchemaProvider, DEFAULT_PG_SCHEMA,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "crud-docs", version, about = "Generate OpenAPI CRUD annotations for models")]
struct Args {
    /// Model identifiers to document. All configured models when empty.
    models: Vec<String>,

    /// Document every configured model.
    #[arg(long)]
    all: bool,

    /// Directory holding models.json and optionally tables.json.
    #[arg(long, env = "CONFIG_PATH", default_value = "sample")]
    config: PathBuf,

    /// PostgreSQL connection string. Table schemas come from config when unset.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// PostgreSQL schema to introspect.
    #[arg(long, env = "CRUD_DOCS_SCHEMA", default_value = DEFAULT_PG_SCHEMA)]
    schema: String,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crud_docs=info")),
        )
        .init();

    let args = Args::parse();
    let config = load_from_dir(&args.config).await?;

    let provider: Box<dyn SchemaProvider> = match args.database_url.as_deref() {
        Some(url) => {
            tracing::info!(schema = %args.schema, "reading table schemas from PostgreSQL");
            Box::new(PgSchemaProvider::connect(&config.models, Some(url), &args.schema).await?)
        }
        None => Box::new(ConfigSchemaProvider::new(&config)?),
    };

    let models: Vec<String> = if args.all || args.models.is_empty() {
        provider.model_ids().into_iter().map(String::from).collect()
    } else {
        args.models
    };
    for model in &models {
        tracing::info!(model = %model, "documenting");
    }
    let docs = generate_for_models(provider.as_ref(), models.as_slice())?;

    match args.out {
        Some(path) => {
            tokio::fs::write(&path, docs).await?;
            tracing::info!(path = %path.display(), models = models.len(), "docs written");
        }
        None => print!("{}", docs),
    }
    Ok(())
}
