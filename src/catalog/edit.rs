//! Declarative edits that derive one catalog version from its predecessor.
//!
//! A script never mutates the catalog it is applied to: `apply` clones the
//! prior catalog, replays the edits in order and hands back the new value.

use crate::catalog::identity::{EntryId, Version};
use crate::catalog::model::{DocumentationCatalog, DocumentationEntry};
use crate::error::CatalogError;
use tracing::debug;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogEdit {
    /// Drop an entry; the id must exist at that point in the script.
    Remove(EntryId),
    /// Add an entry, overwriting any entry already stored under its id.
    Insert(DocumentationEntry),
}

impl CatalogEdit {
    pub fn id(&self) -> &EntryId {
        match self {
            CatalogEdit::Remove(id) => id,
            CatalogEdit::Insert(entry) => &entry.id,
        }
    }

    fn apply_to(&self, catalog: &mut DocumentationCatalog) -> Result<(), CatalogError> {
        match self {
            CatalogEdit::Remove(id) => {
                catalog.remove(id)?;
                debug!(id = %id, "removed entry");
            }
            CatalogEdit::Insert(entry) => {
                let replaced = catalog.insert(entry.id.clone(), entry.clone())?;
                debug!(id = %entry.id, replaced = replaced.is_some(), "inserted entry");
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
/// Ordered edits turning the `base` catalog into the `version` catalog.
pub struct EditScript {
    pub version: Version,
    pub base: Version,
    pub edits: Vec<CatalogEdit>,
}

impl EditScript {
    pub fn new(version: Version, base: Version) -> Self {
        Self {
            version,
            base,
            edits: Vec::new(),
        }
    }

    pub fn remove(mut self, id: &str) -> Self {
        self.edits.push(CatalogEdit::Remove(EntryId::from(id)));
        self
    }

    pub fn insert(mut self, entry: DocumentationEntry) -> Self {
        self.edits.push(CatalogEdit::Insert(entry));
        self
    }

    /// Derive a new catalog from `prior`, leaving `prior` untouched.
    ///
    /// The first failing edit aborts the whole script; no partial catalog is
    /// returned.
    pub fn apply(&self, prior: &DocumentationCatalog) -> Result<DocumentationCatalog, CatalogError> {
        let mut next = prior.clone();
        for edit in &self.edits {
            edit.apply_to(&mut next)?;
        }
        Ok(next)
    }

    /// Ids the script leaves absent from the derived catalog.
    pub fn removed_ids(&self) -> Vec<&EntryId> {
        let mut removed: Vec<&EntryId> = Vec::new();
        for edit in &self.edits {
            match edit {
                CatalogEdit::Remove(id) => {
                    if !removed.contains(&id) {
                        removed.push(id);
                    }
                }
                CatalogEdit::Insert(entry) => removed.retain(|id| *id != &entry.id),
            }
        }
        removed
    }

    /// Ids the script leaves present with the record it inserted.
    pub fn inserted_ids(&self) -> Vec<&EntryId> {
        let mut inserted: Vec<&EntryId> = Vec::new();
        for edit in &self.edits {
            match edit {
                CatalogEdit::Insert(entry) => {
                    if !inserted.contains(&&entry.id) {
                        inserted.push(&entry.id);
                    }
                }
                CatalogEdit::Remove(id) => inserted.retain(|existing| *existing != id),
            }
        }
        inserted
    }
}
