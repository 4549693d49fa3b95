//! The bundled sample config loads and documents every model it declares.

use crud_docs::{generate_for_models, load_from_dir, ConfigSchemaProvider, SchemaProvider};
use std::path::PathBuf;

fn sample_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample")
}

#[tokio::test]
async fn sample_documents_all_models() {
    let config = load_from_dir(sample_dir()).await.unwrap();
    let provider = ConfigSchemaProvider::new(&config).unwrap();
    let ids = provider.model_ids();
    assert_eq!(ids, vec!["app\\models\\Customer", "app\\models\\Product"]);

    let docs = generate_for_models(&provider, ids.as_slice()).unwrap();
    assert_eq!(docs.matches("/**\n").count(), 12);
    assert!(docs.contains(r#"@OA\Property(property="preferences", type="object", description="Preferences")"#));
    assert!(docs.contains(
        r#"@OA\Property(property="birth_date", type="string", description="Birth Date (Format: YYYY-MM-DD)")"#
    ));
    assert!(docs.contains(r#"summary="List all Customers""#));
    assert!(docs.contains(r#"mediaType="multipart/form-data""#));
}
