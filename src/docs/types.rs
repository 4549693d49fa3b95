//! Column metadata to documentation fragments: doc types, descriptions, upload detection.

use crate::case::to_title_words;

/// Storage type -> OpenAPI type. Matched exactly (case-sensitive); anything else is "string".
const TYPE_MAP: &[(&str, &str)] = &[
    ("tinyint", "integer"),
    ("smallint", "integer"),
    ("mediumint", "integer"),
    ("int", "integer"),
    ("bigint", "integer"),
    ("float", "number"),
    ("double", "number"),
    ("decimal", "number"),
    ("char", "string"),
    ("varchar", "string"),
    ("text", "string"),
    ("mediumtext", "string"),
    ("longtext", "string"),
    ("date", "string"),
    ("datetime", "string"),
    ("timestamp", "string"),
    ("time", "string"),
    ("json", "object"),
    ("boolean", "boolean"),
];

const DEFAULT_DOC_TYPE: &str = "string";

/// Storage types (lower-cased) that hold binary payloads sent as file uploads.
const FILE_UPLOAD_TYPES: &[&str] = &["blob", "mediumblob", "longblob", "binary"];

const DATETIME_FORMAT_HINT: &str = " (Format: YYYY-MM-DD HH:mm:ss)";
const DATE_FORMAT_HINT: &str = " (Format: YYYY-MM-DD)";

pub fn map_type(storage_type: &str) -> &'static str {
    TYPE_MAP
        .iter()
        .find(|(raw, _)| *raw == storage_type)
        .map(|(_, doc)| *doc)
        .unwrap_or(DEFAULT_DOC_TYPE)
}

/// Human label for a column, with a format hint for date and time columns.
/// e.g. ("created_at", "datetime") -> "Created At (Format: YYYY-MM-DD HH:mm:ss)"
pub fn describe_column(name: &str, storage_type: &str) -> String {
    let mut description = to_title_words(name);
    match storage_type {
        "datetime" | "timestamp" => description.push_str(DATETIME_FORMAT_HINT),
        "date" => description.push_str(DATE_FORMAT_HINT),
        _ => {}
    }
    description
}

pub fn is_file_upload_column(storage_type: &str) -> bool {
    let lower = storage_type.to_lowercase();
    FILE_UPLOAD_TYPES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("tinyint", "integer")]
    #[case("smallint", "integer")]
    #[case("mediumint", "integer")]
    #[case("int", "integer")]
    #[case("bigint", "integer")]
    #[case("float", "number")]
    #[case("double", "number")]
    #[case("decimal", "number")]
    #[case("char", "string")]
    #[case("varchar", "string")]
    #[case("text", "string")]
    #[case("mediumtext", "string")]
    #[case("longtext", "string")]
    #[case("date", "string")]
    #[case("datetime", "string")]
    #[case("timestamp", "string")]
    #[case("time", "string")]
    #[case("json", "object")]
    #[case("boolean", "boolean")]
    fn maps_known_types(#[case] storage: &str, #[case] expected: &str) {
        assert_eq!(map_type(storage), expected);
    }

    #[rstest]
    #[case("blob")]
    #[case("uuid")]
    #[case("INT")]
    #[case("Boolean")]
    #[case("")]
    fn unknown_types_default_to_string(#[case] storage: &str) {
        assert_eq!(map_type(storage), "string");
    }

    #[rstest]
    #[case("name", "varchar", "Name")]
    #[case("created_at", "datetime", "Created At (Format: YYYY-MM-DD HH:mm:ss)")]
    #[case("updated_at", "timestamp", "Updated At (Format: YYYY-MM-DD HH:mm:ss)")]
    #[case("birth_date", "date", "Birth Date (Format: YYYY-MM-DD)")]
    #[case("opens_at", "time", "Opens At")]
    #[case("created_at", "DATETIME", "Created At")]
    fn describes_columns(#[case] name: &str, #[case] storage: &str, #[case] expected: &str) {
        assert_eq!(describe_column(name, storage), expected);
    }

    #[rstest]
    #[case("blob", true)]
    #[case("MEDIUMBLOB", true)]
    #[case("LongBlob", true)]
    #[case("binary", true)]
    #[case("varbinary", false)]
    #[case("varchar", false)]
    fn detects_file_upload_columns(#[case] storage: &str, #[case] expected: bool) {
        assert_eq!(is_file_upload_column(storage), expected);
    }
}
