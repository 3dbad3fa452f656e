//! Holds one documentation catalog per published version.
//!
//! Catalogs are registered once and never mutated afterwards; newer versions
//! are derived from a registered predecessor through an `EditScript`.

use crate::catalog::edit::EditScript;
use crate::catalog::identity::{EntryId, Version};
use crate::catalog::model::{DocumentationCatalog, DocumentationEntry};
use crate::error::CatalogError;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Default)]
/// In-memory store for catalogs keyed by `Version`.
pub struct CatalogRepository {
    catalogs: BTreeMap<Version, DocumentationCatalog>,
}

impl CatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a catalog, refusing to replace an existing version.
    pub fn register(
        &mut self,
        version: Version,
        catalog: DocumentationCatalog,
    ) -> Result<(), CatalogError> {
        if self.catalogs.contains_key(&version) {
            return Err(CatalogError::VersionExists { version });
        }
        for entry in catalog.iter() {
            entry.validate()?;
        }
        self.catalogs.insert(version, catalog);
        Ok(())
    }

    /// Apply `script` to its base catalog and register the result.
    pub fn derive(&mut self, script: &EditScript) -> Result<&DocumentationCatalog, CatalogError> {
        if self.catalogs.contains_key(&script.version) {
            return Err(CatalogError::VersionExists {
                version: script.version.clone(),
            });
        }
        let base = self
            .catalogs
            .get(&script.base)
            .ok_or_else(|| CatalogError::UnknownVersion {
                version: script.base.clone(),
            })?;
        let derived = script.apply(base)?;
        info!(
            version = %script.version,
            base = %script.base,
            edits = script.edits.len(),
            entries = derived.len(),
            "derived catalog"
        );
        Ok(self
            .catalogs
            .entry(script.version.clone())
            .or_insert(derived))
    }

    pub fn get(&self, version: &Version) -> Option<&DocumentationCatalog> {
        self.catalogs.get(version)
    }

    /// Like `get`, but reports the missing version as an error.
    pub fn require(&self, version: &Version) -> Result<&DocumentationCatalog, CatalogError> {
        self.get(version).ok_or_else(|| CatalogError::UnknownVersion {
            version: version.clone(),
        })
    }

    /// Resolve an entry inside a registered catalog.
    pub fn find_entry(&self, version: &Version, id: &EntryId) -> Option<&DocumentationEntry> {
        self.get(version)?.get(id)
    }

    /// Registered versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = &Version> {
        self.catalogs.keys()
    }

    pub fn latest(&self) -> Option<(&Version, &DocumentationCatalog)> {
        self.catalogs.iter().next_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::identity::Category;

    fn version(raw: &str) -> Version {
        raw.parse().unwrap()
    }

    fn entry(id: &str) -> DocumentationEntry {
        DocumentationEntry::new(
            id,
            id,
            "描述",
            Category::Core,
            &format!("/{id}/java/"),
            "https://github.com/example/repo",
        )
    }

    fn repository() -> CatalogRepository {
        let mut repo = CatalogRepository::new();
        repo.register(
            version("1.0.0"),
            DocumentationCatalog::from_entries([entry("a")]).unwrap(),
        )
        .unwrap();
        repo
    }

    #[test]
    fn derive_registers_new_version() {
        let mut repo = repository();
        let script = EditScript::new(version("1.1.0"), version("1.0.0")).insert(entry("b"));
        let derived = repo.derive(&script).unwrap();
        assert_eq!(derived.len(), 2);

        let versions: Vec<String> = repo.versions().map(Version::to_string).collect();
        assert_eq!(versions, vec!["1.0.0", "1.1.0"]);
        assert_eq!(repo.latest().map(|(v, _)| v.to_string()), Some("1.1.0".into()));
        assert!(repo.find_entry(&version("1.1.0"), &"b".into()).is_some());
        assert!(repo.find_entry(&version("1.0.0"), &"b".into()).is_none());
    }

    #[test]
    fn derive_requires_registered_base() {
        let mut repo = repository();
        let script = EditScript::new(version("3.0.0"), version("2.0.0"));
        assert_eq!(
            repo.derive(&script).unwrap_err(),
            CatalogError::UnknownVersion {
                version: version("2.0.0")
            }
        );
    }

    #[test]
    fn versions_are_registered_once() {
        let mut repo = repository();
        let again = repo.register(version("1.0.0"), DocumentationCatalog::new());
        assert_eq!(
            again.unwrap_err(),
            CatalogError::VersionExists {
                version: version("1.0.0")
            }
        );
        let script = EditScript::new(version("1.0.0"), version("1.0.0"));
        assert!(repo.derive(&script).is_err());
    }

    #[test]
    fn failed_derive_registers_nothing() {
        let mut repo = repository();
        let script = EditScript::new(version("1.1.0"), version("1.0.0")).remove("missing");
        assert!(repo.derive(&script).is_err());
        assert!(repo.get(&version("1.1.0")).is_none());
        assert!(repo.require(&version("1.1.0")).is_err());
    }
}
