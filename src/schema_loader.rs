//! JSON Schema handling for catalog documents.
//!
//! The canonical schema ships inside the crate; callers may compile an
//! alternate copy from disk. Either way the schema's `schema_version` const
//! becomes the only version a document may declare.

use crate::error::CatalogError;
use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const EMBEDDED_SCHEMA: &str = include_str!("../schema/documentation_catalog.schema.json");
const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Compiled catalog schema plus the document version it accepts.
pub struct CatalogSchema {
    pub schema_version: String,
    compiled: JSONSchema,
}

impl CatalogSchema {
    /// Compile the schema bundled with the crate.
    pub fn embedded() -> Result<Self> {
        let value: Value =
            serde_json::from_str(EMBEDDED_SCHEMA).context("parsing embedded catalog schema")?;
        Self::compile(&value, "embedded catalog schema")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&value, &path.display().to_string())
    }

    fn compile(value: &Value, origin: &str) -> Result<Self> {
        let schema_version = extract_schema_version(value)
            .ok_or_else(|| anyhow!("{origin} missing schema_version const"))?;
        let compiled = JSONSchema::compile(value)
            .map_err(|err| anyhow!("compiling {origin}: {err}"))?;
        Ok(Self {
            schema_version,
            compiled,
        })
    }

    /// Validate a raw catalog document, reporting every violation at once.
    pub fn validate(&self, document: &Value) -> Result<(), CatalogError> {
        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            return Err(CatalogError::Schema(details));
        }
        Ok(())
    }
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}
