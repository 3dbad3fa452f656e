//! In-memory representation of a documentation catalog.
//!
//! `DocumentationEntry` mirrors one record of the catalog file; the catalog
//! itself keeps entries keyed by id while remembering insertion order, which
//! is the order the site renders them in. Use `loader` to read catalogs from
//! disk with schema validation.

use crate::catalog::identity::{Category, EntryId, Label, Version};
use crate::error::CatalogError;
use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Metadata describing one documentation page.
pub struct DocumentationEntry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub href: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
}

impl DocumentationEntry {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: Category,
        href: &str,
        repository: &str,
    ) -> Self {
        Self {
            id: EntryId::from(id),
            name: name.to_string(),
            description: description.to_string(),
            category,
            href: href.to_string(),
            repository: repository.to_string(),
            edit: None,
            examples: None,
            label: None,
        }
    }

    pub fn with_edit(mut self, edit: &str) -> Self {
        self.edit = Some(edit.to_string());
        self
    }

    pub fn with_examples(mut self, examples: &str) -> Self {
        self.examples = Some(examples.to_string());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    /// Check that every required field carries a non-blank value.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let required = [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
            ("category", self.category.as_str()),
            ("href", self.href.as_str()),
            ("repository", self.repository.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// Entries of one catalog version, keyed by id.
///
/// Keys are unique and always equal the id of the entry stored under them.
/// Iteration follows insertion order: a new id is appended, overwriting an
/// existing id keeps its slot, removal drops it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentationCatalog {
    order: Vec<EntryId>,
    entries: BTreeMap<EntryId, DocumentationEntry>,
}

impl DocumentationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries in display order, rejecting duplicate ids.
    pub fn from_entries(
        entries: impl IntoIterator<Item = DocumentationEntry>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for entry in entries {
            if catalog.contains(&entry.id) {
                return Err(CatalogError::DuplicateEntry { id: entry.id });
            }
            let id = entry.id.clone();
            catalog.insert(id, entry)?;
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &EntryId) -> Option<&DocumentationEntry> {
        self.entries.get(id)
    }

    /// Ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &EntryId> {
        self.order.iter()
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &DocumentationEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Add or overwrite the entry stored under `id`.
    ///
    /// Returns the replaced entry when `id` was already present. The entry's
    /// own id must equal `id` and its required fields must be filled in.
    pub fn insert(
        &mut self,
        id: EntryId,
        entry: DocumentationEntry,
    ) -> Result<Option<DocumentationEntry>, CatalogError> {
        if entry.id != id {
            return Err(CatalogError::IdMismatch {
                key: id,
                entry: entry.id,
            });
        }
        entry.validate()?;
        let previous = self.entries.insert(id.clone(), entry);
        if previous.is_none() {
            self.order.push(id);
        }
        Ok(previous)
    }

    /// Delete the entry stored under `id`; absent ids are an error.
    pub fn remove(&mut self, id: &EntryId) -> Result<DocumentationEntry, CatalogError> {
        let removed = self
            .entries
            .remove(id)
            .ok_or_else(|| CatalogError::EntryNotFound { id: id.clone() })?;
        self.order.retain(|existing| existing != id);
        Ok(removed)
    }

    /// Entries grouped for navigation: groups by category rank, entries in
    /// catalog order inside each group.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&DocumentationEntry>> {
        let mut groups: BTreeMap<Category, Vec<&DocumentationEntry>> = BTreeMap::new();
        for entry in self.iter() {
            groups.entry(entry.category.clone()).or_default().push(entry);
        }
        groups
    }

    /// Wrap the catalog in the on-disk document shape.
    pub fn to_document(&self, version: &Version) -> CatalogDocument {
        CatalogDocument {
            schema_version: CATALOG_SCHEMA_VERSION.to_string(),
            version: version.clone(),
            entries: self.iter().cloned().collect(),
        }
    }
}

/// Schema key written into every catalog document.
pub const CATALOG_SCHEMA_VERSION: &str = "docs_catalog_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Catalog as stored on disk: a version tag plus entries in display order.
pub struct CatalogDocument {
    pub schema_version: String,
    pub version: Version,
    pub entries: Vec<DocumentationEntry>,
}

impl CatalogDocument {
    pub fn into_catalog(self) -> Result<DocumentationCatalog, CatalogError> {
        DocumentationCatalog::from_entries(self.entries)
    }
}

// Exported catalogs are objects keyed by id, matching what the site
// generator consumes.
impl Serialize for DocumentationCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self.iter() {
            map.serialize_entry(&entry.id, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DocumentationCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = DocumentationCatalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of entry id to documentation entry")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = DocumentationCatalog::new();
        while let Some((id, entry)) = access.next_entry::<EntryId, DocumentationEntry>()? {
            if catalog.contains(&id) {
                return Err(A::Error::custom(CatalogError::DuplicateEntry { id }));
            }
            catalog.insert(id, entry).map_err(A::Error::custom)?;
        }
        Ok(catalog)
    }
}
