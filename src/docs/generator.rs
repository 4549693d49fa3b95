//! The CRUD documentation generator for one model.

use crate::config::ModelDescriptor;
use crate::docs::annotation::doc_block;
use crate::docs::endpoints;
use crate::docs::types::is_file_upload_column;
use crate::error::{ConfigurationError, DocsError};
use crate::provider::SchemaProvider;

/// Resolves a model's table once, at construction, then renders its docs.
#[derive(Clone, Debug)]
pub struct DocsGenerator {
    model: ModelDescriptor,
}

impl DocsGenerator {
    /// Resolve `identifier` through `provider`. Fails on the first problem found:
    /// unknown model, model without a display name or table name, no connection,
    /// missing table, table without columns.
    pub fn new<P>(provider: &P, identifier: &str) -> Result<Self, DocsError>
    where
        P: SchemaProvider + ?Sized,
    {
        let model_type = provider
            .resolve_model(identifier)
            .ok_or_else(|| DocsError::UnknownModel(identifier.to_string()))?;
        if model_type.short_name.trim().is_empty() {
            return Err(DocsError::UnsupportedModel(identifier.to_string()));
        }
        let table_name = model_type
            .table_name
            .ok_or_else(|| DocsError::UnsupportedModel(identifier.to_string()))?;
        let connection = provider.connection().ok_or(ConfigurationError::NoConnection)?;
        let table = connection
            .table_schema(&table_name)
            .ok_or_else(|| ConfigurationError::TableNotFound(table_name.clone()))?;
        if table.columns.is_empty() {
            return Err(ConfigurationError::NoColumns(table_name).into());
        }

        tracing::debug!(
            model = %identifier,
            table = %table_name,
            columns = table.columns.len(),
            "resolved model"
        );
        Ok(DocsGenerator {
            model: ModelDescriptor {
                identifier: model_type.identifier,
                model_name: model_type.short_name,
                table_name,
                columns: table.columns,
            },
        })
    }

    pub fn descriptor(&self) -> &ModelDescriptor {
        &self.model
    }

    /// True when any column stores binary payloads, which switches Create and
    /// Update request bodies to multipart/form-data.
    pub fn has_file_upload_columns(&self) -> bool {
        self.model
            .columns
            .iter()
            .any(|c| is_file_upload_column(&c.storage_type))
    }

    /// Schema block followed by Create, Update, View, List and Delete, each in its own doc comment.
    pub fn generate_crud_docs(&self) -> String {
        let multipart = self.has_file_upload_columns();
        let blocks = [
            endpoints::schema_component(&self.model),
            endpoints::create(&self.model, multipart),
            endpoints::update(&self.model, multipart),
            endpoints::view(&self.model),
            endpoints::list(&self.model),
            endpoints::delete(&self.model),
        ];
        blocks.iter().map(doc_block).collect()
    }
}
