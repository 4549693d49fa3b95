//! OpenAPI annotation generation for CRUD endpoints.

pub mod annotation;
pub mod endpoints;
mod generator;
pub mod types;

pub use generator::DocsGenerator;
pub use types::{describe_column, is_file_upload_column, map_type};

use crate::error::DocsError;
use crate::provider::SchemaProvider;

/// Generate docs for several models in order, stopping at the first that fails.
pub fn generate_for_models<P, S>(provider: &P, identifiers: &[S]) -> Result<String, DocsError>
where
    P: SchemaProvider + ?Sized,
    S: AsRef<str>,
{
    let mut out = String::new();
    for id in identifiers {
        let generator = DocsGenerator::new(provider, id.as_ref())?;
        out.push_str(&generator.generate_crud_docs());
    }
    Ok(out)
}
