//! Error types for catalog loading.

use std::path::PathBuf;

use ins_model::CatalogError;
use thiserror::Error;

/// Errors that can occur when loading the enumeration catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// Failed to read a catalog file from disk.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog CSV.
    #[error("Failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// Invalid value in a CSV cell.
    #[error("Invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
    },

    /// The rows parsed but violate a catalog invariant.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The process-wide catalog was already loaded.
    #[error("The enumeration catalog is already initialized")]
    AlreadyInitialized,
}

/// Result type for catalog loading operations.
pub type Result<T> = std::result::Result<T, LoadError>;
