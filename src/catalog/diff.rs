use crate::catalog::identity::EntryId;
use crate::catalog::model::DocumentationCatalog;
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
/// Ids that differ between two catalogs, each list in display order.
pub struct CatalogDiff {
    pub removed: Vec<EntryId>,
    pub added: Vec<EntryId>,
    pub changed: Vec<EntryId>,
}

impl CatalogDiff {
    pub fn between(old: &DocumentationCatalog, new: &DocumentationCatalog) -> Self {
        let removed = old.ids().filter(|id| !new.contains(id)).cloned().collect();
        let mut added = Vec::new();
        let mut changed = Vec::new();
        for entry in new.iter() {
            match old.get(&entry.id) {
                None => added.push(entry.id.clone()),
                Some(previous) if previous != entry => changed.push(entry.id.clone()),
                Some(_) => {}
            }
        }
        Self {
            removed,
            added,
            changed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, DocumentationEntry};

    fn entry(id: &str, name: &str) -> DocumentationEntry {
        DocumentationEntry::new(
            id,
            name,
            "描述",
            Category::Web,
            &format!("/{id}/java/"),
            "https://github.com/example/repo",
        )
    }

    #[test]
    fn reports_removed_added_and_changed() {
        let old = DocumentationCatalog::from_entries([
            entry("kept", "kept"),
            entry("gone", "gone"),
            entry("edited", "before"),
        ])
        .unwrap();
        let new = DocumentationCatalog::from_entries([
            entry("kept", "kept"),
            entry("edited", "after"),
            entry("new", "new"),
        ])
        .unwrap();

        let diff = CatalogDiff::between(&old, &new);
        assert_eq!(diff.removed, vec![EntryId::from("gone")]);
        assert_eq!(diff.added, vec![EntryId::from("new")]);
        assert_eq!(diff.changed, vec![EntryId::from("edited")]);
        assert!(CatalogDiff::between(&new, &new).is_empty());
    }
}
