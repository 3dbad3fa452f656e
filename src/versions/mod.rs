//! Release history of the documentation catalog.
//!
//! Only the oldest catalog is stored as data; every later release is an edit
//! script applied to its predecessor, so the published repository is rebuilt
//! from scratch on each call.

use crate::catalog::{
    CatalogRepository, EditScript, LoadedCatalog, embedded_base_catalog, load_catalog_from_path,
};
use crate::config::Config;
use crate::error::CatalogError;
use crate::schema_loader::CatalogSchema;
use anyhow::{Context, Result};
use tracing::debug;

pub mod v4_3_0;

/// Every bundled edit script, oldest release first.
pub fn edit_scripts() -> Vec<EditScript> {
    let mut scripts = vec![v4_3_0::script()];
    scripts.sort_by(|a, b| a.version.cmp(&b.version));
    scripts
}

/// Register `base` and derive every later release from it.
///
/// Scripts for releases at or before the base version are skipped; a script
/// whose predecessor never got registered fails the build.
pub fn build_repository(
    base: LoadedCatalog,
    scripts: &[EditScript],
) -> Result<CatalogRepository, CatalogError> {
    let mut repository = CatalogRepository::new();
    let base_version = base.version.clone();
    repository.register(base.version, base.catalog)?;
    for script in scripts {
        if script.version <= base_version {
            debug!(version = %script.version, "skipping script older than base catalog");
            continue;
        }
        repository.derive(script)?;
    }
    Ok(repository)
}

/// The catalog schema selected by `config`.
pub fn catalog_schema(config: &Config) -> Result<CatalogSchema> {
    match &config.schema {
        Some(path) => CatalogSchema::from_path(path),
        None => CatalogSchema::embedded(),
    }
}

/// Build the repository of published catalogs.
pub fn published(config: &Config) -> Result<CatalogRepository> {
    let schema = catalog_schema(config)?;
    let base = match &config.base_catalog {
        Some(path) => load_catalog_from_path(path, &schema)?,
        None => embedded_base_catalog(&schema)?,
    };
    let base_version = base.version.clone();
    build_repository(base, &edit_scripts())
        .with_context(|| format!("deriving releases from base catalog {base_version}"))
}
