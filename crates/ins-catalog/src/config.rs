//! Catalog source configuration.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the catalog directory.
pub const CATALOG_ENV_VAR: &str = "INS_CATALOG_DIR";

/// Where the catalog schema files come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The files embedded in the binary.
    #[default]
    Embedded,
    /// A directory holding `Enumerations.csv` and `Members.csv`.
    Directory(PathBuf),
}

/// Configuration for loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    pub source: CatalogSource,
}

impl CatalogConfig {
    /// Load from the embedded files.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Load from the two CSV files in `dir`.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::Directory(dir.into()),
        }
    }

    /// Resolution order:
    /// 1. `INS_CATALOG_DIR` environment variable (when non-empty)
    /// 2. embedded data
    pub fn from_env() -> Self {
        match std::env::var_os(CATALOG_ENV_VAR) {
            Some(dir) if !dir.is_empty() => Self::directory(dir),
            _ => Self::embedded(),
        }
    }

    /// Directory to read from, `None` for embedded data.
    pub fn directory_path(&self) -> Option<&Path> {
        match &self.source {
            CatalogSource::Embedded => None,
            CatalogSource::Directory(dir) => Some(dir),
        }
    }
}
