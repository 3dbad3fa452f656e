use crate::catalog::{EntryId, Version};

/// Failures raised while building or registering a catalog.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("entry '{id}' not found in catalog")]
    EntryNotFound { id: EntryId },

    #[error("entry id '{entry}' does not match catalog key '{key}'")]
    IdMismatch { key: EntryId, entry: EntryId },

    #[error("entry '{id}' is missing required field '{field}'")]
    MissingField { id: EntryId, field: &'static str },

    #[error("duplicate entry id '{id}'")]
    DuplicateEntry { id: EntryId },

    #[error("no catalog registered for version {version}")]
    UnknownVersion { version: Version },

    #[error("a catalog is already registered for version {version}")]
    VersionExists { version: Version },

    #[error("invalid version '{0}': expected dotted numeric components")]
    InvalidVersion(String),

    #[error("catalog failed schema validation:\n{0}")]
    Schema(String),
}
