use anyhow::{Result, bail};
use std::env;
use std::path::{Path, PathBuf};

pub const BASE_CATALOG_ENV: &str = "DOCS_CATALOG_BASE";
pub const SCHEMA_ENV: &str = "DOCS_CATALOG_SCHEMA";

/// Where catalog inputs come from.
///
/// Both paths are optional; without them the catalog and schema compiled into
/// the crate are used.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_catalog: Option<PathBuf>,
    pub schema: Option<PathBuf>,
}

impl Config {
    /// Optional:
    /// - `DOCS_CATALOG_BASE` (alternate base catalog document)
    /// - `DOCS_CATALOG_SCHEMA` (alternate catalog schema)
    ///
    /// Empty values count as unset. Paths are not checked here; call
    /// [`Config::check`] once command-line overrides are merged.
    pub fn from_env() -> Self {
        Self {
            base_catalog: path_from_env(BASE_CATALOG_ENV),
            schema: path_from_env(SCHEMA_ENV),
        }
    }

    /// Command-line values win over the environment.
    pub fn with_overrides(self, base_catalog: Option<PathBuf>, schema: Option<PathBuf>) -> Self {
        Self {
            base_catalog: base_catalog.or(self.base_catalog),
            schema: schema.or(self.schema),
        }
    }

    /// Every configured path must point at a file.
    pub fn check(self) -> Result<Self> {
        if let Some(path) = &self.base_catalog {
            require_file(path, "--base", BASE_CATALOG_ENV)?;
        }
        if let Some(path) = &self.schema {
            require_file(path, "--schema", SCHEMA_ENV)?;
        }
        Ok(self)
    }
}

fn path_from_env(name: &str) -> Option<PathBuf> {
    env::var_os(name)
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}

fn require_file(path: &Path, flag: &str, variable: &str) -> Result<()> {
    if !path.is_file() {
        bail!(
            "{flag}/{variable} points at {}, which is not a file",
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn overrides_take_precedence() {
        let from_env = Config {
            base_catalog: Some(PathBuf::from("env-base.json")),
            schema: Some(PathBuf::from("env-schema.json")),
        };
        let merged = from_env.with_overrides(Some(PathBuf::from("cli-base.json")), None);
        assert_eq!(merged.base_catalog, Some(PathBuf::from("cli-base.json")));
        assert_eq!(merged.schema, Some(PathBuf::from("env-schema.json")));
    }

    #[test]
    fn unset_variable_yields_none() {
        assert_eq!(
            path_from_env("DOCS_CATALOG_TEST_VARIABLE_THAT_IS_NEVER_SET"),
            None
        );
    }

    #[test]
    fn stale_value_is_ignored_once_overridden() {
        let file = NamedTempFile::new().unwrap();
        let stale = Config {
            base_catalog: Some(PathBuf::from("/nonexistent/catalog.json")),
            schema: None,
        };
        let merged = stale
            .with_overrides(Some(file.path().to_path_buf()), None)
            .check()
            .unwrap();
        assert_eq!(merged.base_catalog.as_deref(), Some(file.path()));
    }

    #[test]
    fn check_names_the_variable_for_a_missing_path() {
        let config = Config {
            base_catalog: None,
            schema: Some(PathBuf::from("/nonexistent/schema.json")),
        };
        let message = config.check().unwrap_err().to_string();
        assert!(message.contains(SCHEMA_ENV), "{message}");
        assert!(message.contains("/nonexistent/schema.json"), "{message}");
    }
}
