//! Reading catalog documents from JSON.
//!
//! Loading is strict: the document must pass the catalog schema, declare the
//! schema version the schema accepts, and satisfy the catalog invariants
//! (unique ids, required fields filled in) before a catalog is handed out.

use crate::catalog::identity::Version;
use crate::catalog::model::{CatalogDocument, DocumentationCatalog};
use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

const EMBEDDED_BASE: &str = include_str!("../../data/4.2.0.json");

/// A validated catalog together with the version it was published for.
#[derive(Clone, Debug)]
pub struct LoadedCatalog {
    pub version: Version,
    pub catalog: DocumentationCatalog,
}

/// Parse and validate a catalog document held in memory.
pub fn load_catalog_from_str(data: &str, schema: &CatalogSchema) -> Result<LoadedCatalog> {
    let value: Value = serde_json::from_str(data).context("parsing catalog document")?;

    let declared = value
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if declared != schema.schema_version {
        bail!(
            "schema_version '{}' does not match expected '{}'",
            declared,
            schema.schema_version
        );
    }

    schema.validate(&value)?;

    let document: CatalogDocument =
        serde_json::from_value(value).context("decoding catalog document")?;
    let version = document.version.clone();
    let catalog = document
        .into_catalog()
        .with_context(|| format!("catalog {version} violates catalog invariants"))?;
    debug!(version = %version, entries = catalog.len(), "loaded catalog");
    Ok(LoadedCatalog { version, catalog })
}

/// Read, parse and validate a catalog document from disk.
pub fn load_catalog_from_path(path: &Path, schema: &CatalogSchema) -> Result<LoadedCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    load_catalog_from_str(&data, schema).with_context(|| format!("loading {}", path.display()))
}

/// The base catalog compiled into the crate.
pub fn embedded_base_catalog(schema: &CatalogSchema) -> Result<LoadedCatalog> {
    load_catalog_from_str(EMBEDDED_BASE, schema).context("loading embedded base catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;
    use serde_json::json;

    fn schema() -> CatalogSchema {
        CatalogSchema::embedded().expect("embedded schema")
    }

    #[test]
    fn embedded_base_is_valid() {
        let loaded = embedded_base_catalog(&schema()).expect("base loads");
        assert_eq!(loaded.version.to_string(), "4.2.0");
        let grpc = loaded
            .catalog
            .get(&EntryId::from("vertx-grpc"))
            .expect("base carries vertx-grpc");
        assert_eq!(grpc.name, "gRPC");
        for (key, entry) in loaded.catalog.ids().zip(loaded.catalog.iter()) {
            assert_eq!(key, &entry.id);
        }
    }

    #[test]
    fn rejects_unexpected_schema_version() {
        let document = json!({
            "schema_version": "docs_catalog_v0",
            "version": "1.0.0",
            "entries": []
        });
        let err = load_catalog_from_str(&document.to_string(), &schema()).unwrap_err();
        assert!(err.to_string().contains("docs_catalog_v0"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entry = json!({
            "id": "dup",
            "name": "Dup",
            "description": "d",
            "category": "core",
            "href": "/dup/java/",
            "repository": "https://github.com/example/dup"
        });
        let document = json!({
            "schema_version": "docs_catalog_v1",
            "version": "1.0.0",
            "entries": [entry.clone(), entry]
        });
        let err = load_catalog_from_str(&document.to_string(), &schema()).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate entry id 'dup'"));
    }
}
