//! Documentation catalog wiring.
//!
//! Types here describe documentation entries and the per-version catalogs
//! that hold them. Callers load a base catalog with `loader`, derive later
//! versions with `EditScript`, and keep every version in a
//! `CatalogRepository`.

pub mod diff;
pub mod edit;
pub mod identity;
pub mod loader;
pub mod model;
pub mod repository;

pub use diff::CatalogDiff;
pub use edit::{CatalogEdit, EditScript};
pub use identity::{Category, EntryId, Label, Version};
pub use loader::{
    LoadedCatalog, embedded_base_catalog, load_catalog_from_path, load_catalog_from_str,
};
pub use model::{CATALOG_SCHEMA_VERSION, CatalogDocument, DocumentationCatalog, DocumentationEntry};
pub use repository::CatalogRepository;
