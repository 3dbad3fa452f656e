//! Versioned documentation metadata for the documentation site.
//!
//! The crate exposes the catalog types (entries, per-version catalogs, edit
//! scripts) and the release history built from them. Public functions here form
//! the contract the `docs-catalog` binary and the site generator depend on:
//! build the published repository, resolve a release by version string, and
//! render a catalog in the JSON shapes the site consumes.

use anyhow::{Context, Result};
use serde_json::{Map, Value};

pub mod catalog;
pub mod config;
pub mod error;
pub mod schema_loader;
pub mod versions;

pub use catalog::{
    CatalogDiff, CatalogEdit, CatalogRepository, Category, DocumentationCatalog,
    DocumentationEntry, EditScript, EntryId, Label, LoadedCatalog, Version,
    load_catalog_from_path, load_catalog_from_str,
};
pub use config::Config;
pub use error::CatalogError;
pub use schema_loader::CatalogSchema;
pub use versions::{build_repository, catalog_schema, edit_scripts, published};

/// Resolve the published catalog for a version string such as `4.3.0`.
pub fn published_catalog(config: &Config, version: &str) -> Result<DocumentationCatalog> {
    let version: Version = version.parse()?;
    let repository = published(config)?;
    let catalog = repository
        .require(&version)
        .with_context(|| format!("resolving published catalog {version}"))?;
    Ok(catalog.clone())
}

/// Render a catalog grouped by category: `{ category: [entry, ...] }`.
///
/// Groups follow the navigation order; entries keep catalog order.
pub fn catalog_by_category_json(catalog: &DocumentationCatalog) -> Result<Value> {
    let mut groups = Map::new();
    for (category, entries) in catalog.by_category() {
        let rendered = entries
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("serializing category {category}"))?;
        groups.insert(category.to_string(), Value::Array(rendered));
    }
    Ok(Value::Object(groups))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_catalog_rejects_unknown_versions() {
        let err = published_catalog(&Config::default(), "9.9.9").unwrap_err();
        assert!(format!("{err:#}").contains("no catalog registered for version 9.9.9"));
        assert!(published_catalog(&Config::default(), "latest").is_err());
    }

    #[test]
    fn grouped_json_uses_navigation_order() {
        let catalog = published_catalog(&Config::default(), "4.3.0").unwrap();
        let grouped = catalog_by_category_json(&catalog).unwrap();
        let categories: Vec<&String> = grouped.as_object().unwrap().keys().collect();
        assert_eq!(categories.first().map(|c| c.as_str()), Some("core"));
        let services = grouped["services"].as_array().unwrap();
        let ids: Vec<&str> = services
            .iter()
            .filter_map(|entry| entry["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["vertx-service-proxy", "vertx-grpc", "vertx-grpc-netty"]);
    }

    #[test]
    fn grouped_json_keeps_entries_tagged_with_a_spelled_out_category() {
        let entry = |id: &str, category: Category| {
            DocumentationEntry::new(
                id,
                id,
                "d",
                category,
                &format!("/{id}/java/"),
                &format!("https://github.com/example/{id}"),
            )
        };
        let catalog = DocumentationCatalog::from_entries([
            entry("router", Category::Web),
            entry("client", Category::Other("web".to_string())),
        ])
        .unwrap();

        let grouped = catalog_by_category_json(&catalog).unwrap();
        let web: Vec<&str> = grouped["web"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|entry| entry["id"].as_str())
            .collect();
        assert_eq!(web, vec!["router", "client"]);
    }
}
