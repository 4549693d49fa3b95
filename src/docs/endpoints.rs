//! Annotation builders for the schema component and the five CRUD endpoints.

use crate::config::{ModelDescriptor, ID_COLUMN};
use crate::docs::annotation::Annotation;
use crate::docs::types::{describe_column, map_type};

const BEARER_SECURITY: &str = r#"{{"bearerAuth":{}}}"#;
const MULTIPART: &str = "multipart/form-data";
const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PER_PAGE: i64 = 10;
const PAGINATION_META: &[&str] = &["totalCount", "pageCount", "currentPage", "perPage"];

fn schema_ref(model: &ModelDescriptor) -> String {
    format!("#/components/schemas/{}", model.model_name)
}

fn collection_path(model: &ModelDescriptor) -> String {
    format!("/{}", model.table_name)
}

fn item_path(model: &ModelDescriptor) -> String {
    format!("/{}/{{{}}}", model.table_name, ID_COLUMN)
}

/// Method annotation with the fields every endpoint shares.
fn operation(method: &'static str, path: String, summary: String, model: &ModelDescriptor) -> Annotation {
    Annotation::new(method)
        .str("path", path)
        .str("summary", summary)
        .list("tags", [model.model_name.as_str()])
        .raw("security", BEARER_SECURITY)
}

fn id_parameter(model: &ModelDescriptor) -> Annotation {
    Annotation::new("OA\\Parameter")
        .str("name", ID_COLUMN)
        .str("in", "path")
        .str("description", format!("{} ID", model.model_name))
        .bool("required", true)
        .child(Annotation::new("OA\\Schema").str("type", "integer"))
}

fn page_parameter(name: &'static str, description: &str, default: i64) -> Annotation {
    Annotation::new("OA\\Parameter")
        .str("name", name)
        .str("in", "query")
        .str("description", description)
        .bool("required", false)
        .child(
            Annotation::new("OA\\Schema")
                .str("type", "integer")
                .int("default", default),
        )
}

fn model_response(code: i64, description: String, model: &ModelDescriptor) -> Annotation {
    Annotation::new("OA\\Response")
        .int("response", code)
        .str("description", description)
        .child(Annotation::new("OA\\JsonContent").str("ref", schema_ref(model)))
}

fn plain_response(code: i64, description: String) -> Annotation {
    Annotation::new("OA\\Response")
        .int("response", code)
        .str("description", description)
}

fn invalid_input() -> Annotation {
    plain_response(400, "Invalid input".into())
}

fn not_found(model: &ModelDescriptor) -> Annotation {
    plain_response(404, format!("{} not found", model.model_name))
}

/// The named schema component: synthetic integer `id` first, then one property
/// per remaining column with a per-property `required` flag on NOT NULL columns.
pub fn schema_component(model: &ModelDescriptor) -> Annotation {
    let id = Annotation::new("OA\\Property")
        .str("property", ID_COLUMN)
        .str("type", "integer")
        .str("description", "Unique identifier");
    let properties = model.data_columns().map(|c| {
        let mut property = Annotation::new("OA\\Property")
            .str("property", c.name.as_str())
            .str("type", map_type(&c.storage_type));
        if c.is_required() {
            property = property.bool("required", true);
        }
        property.str("description", describe_column(&c.name, &c.storage_type))
    });
    Annotation::new("OA\\Schema")
        .str("schema", model.model_name.as_str())
        .str("title", model.model_name.as_str())
        .str("description", format!("{} model", model.model_name))
        .child(id)
        .children(properties)
}

pub fn create(model: &ModelDescriptor, multipart: bool) -> Annotation {
    let reference = schema_ref(model);
    let content = if multipart {
        Annotation::new("OA\\MediaType")
            .str("mediaType", MULTIPART)
            .child(Annotation::new("OA\\Schema").str("ref", reference))
    } else {
        Annotation::new("OA\\JsonContent").str("ref", reference)
    };
    operation(
        "OA\\Post",
        collection_path(model),
        format!("Create new {}", model.model_name),
        model,
    )
    .child(
        Annotation::new("OA\\RequestBody")
            .bool("required", true)
            .child(content),
    )
    .child(model_response(201, format!("{} created successfully", model.model_name), model))
    .child(invalid_input())
}

/// Update documents its body inline. Required columns appear only in the
/// `required={...}` list, never as per-property flags.
pub fn update(model: &ModelDescriptor, multipart: bool) -> Annotation {
    let required = model.required_columns();
    let properties: Vec<Annotation> = model
        .data_columns()
        .map(|c| {
            Annotation::new("OA\\Property")
                .str("property", c.name.as_str())
                .str("type", map_type(&c.storage_type))
                .str("description", describe_column(&c.name, &c.storage_type))
        })
        .collect();

    let mut body_schema = if multipart {
        Annotation::new("OA\\Schema")
    } else {
        Annotation::new("OA\\JsonContent")
    };
    if !required.is_empty() {
        body_schema = body_schema.list("required", required);
    }
    body_schema = body_schema.children(properties);

    let content = if multipart {
        Annotation::new("OA\\MediaType")
            .str("mediaType", MULTIPART)
            .child(body_schema)
    } else {
        body_schema
    };

    operation(
        "OA\\Put",
        item_path(model),
        format!("Update {}", model.model_name),
        model,
    )
    .child(id_parameter(model))
    .child(
        Annotation::new("OA\\RequestBody")
            .bool("required", true)
            .child(content),
    )
    .child(model_response(200, format!("{} updated successfully", model.model_name), model))
    .child(invalid_input())
    .child(not_found(model))
}

pub fn view(model: &ModelDescriptor) -> Annotation {
    operation(
        "OA\\Get",
        item_path(model),
        format!("View {} details", model.model_name),
        model,
    )
    .child(id_parameter(model))
    .child(model_response(200, format!("{} details", model.model_name), model))
    .child(not_found(model))
}

pub fn list(model: &ModelDescriptor) -> Annotation {
    let meta = Annotation::new("OA\\Property")
        .str("property", "_meta")
        .str("type", "object")
        .children(PAGINATION_META.iter().map(|name| {
            Annotation::new("OA\\Property")
                .str("property", *name)
                .str("type", "integer")
        }));
    let items = Annotation::new("OA\\Property")
        .str("property", "items")
        .str("type", "array")
        .child(Annotation::new("OA\\Items").str("ref", schema_ref(model)));

    operation(
        "OA\\Get",
        collection_path(model),
        format!("List all {}s", model.model_name),
        model,
    )
    .child(page_parameter("page", "Page number", DEFAULT_PAGE))
    .child(page_parameter("per_page", "Items per page", DEFAULT_PER_PAGE))
    .child(
        Annotation::new("OA\\Response")
            .int("response", 200)
            .str("description", format!("List of {}s", model.model_name))
            .child(
                Annotation::new("OA\\JsonContent")
                    .str("type", "object")
                    .child(items)
                    .child(meta),
            ),
    )
}

pub fn delete(model: &ModelDescriptor) -> Annotation {
    operation(
        "OA\\Delete",
        item_path(model),
        format!("Delete {}", model.model_name),
        model,
    )
    .child(id_parameter(model))
    .child(plain_response(200, format!("{} deleted successfully", model.model_name)))
    .child(not_found(model))
}
