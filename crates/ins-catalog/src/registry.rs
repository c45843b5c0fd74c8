//! Process-wide catalog.
//!
//! The catalog is loaded once, on first use, and shared by every
//! enumeration kind. A failed load is logged and leaves the catalog
//! unavailable: every lookup through a kind is then absent.

use std::sync::OnceLock;

use ins_model::Catalog;

use crate::config::CatalogConfig;
use crate::error::{LoadError, Result};
use crate::loader;

static CATALOG: OnceLock<Option<Catalog>> = OnceLock::new();

/// The process-wide catalog, loaded from [`CatalogConfig::from_env`] on
/// first call.
pub fn catalog() -> Option<&'static Catalog> {
    CATALOG
        .get_or_init(|| {
            let config = CatalogConfig::from_env();
            match loader::load(&config) {
                Ok(catalog) => Some(catalog),
                Err(error) => {
                    tracing::error!(source = ?config.source, %error, "failed to load enumeration catalog");
                    None
                }
            }
        })
        .as_ref()
}

/// Load `config` and install it as the process-wide catalog.
///
/// Must run before the first call to [`catalog`].
pub fn install(config: &CatalogConfig) -> Result<&'static Catalog> {
    if CATALOG.get().is_some() {
        return Err(LoadError::AlreadyInitialized);
    }
    let loaded = loader::load(config)?;
    CATALOG
        .set(Some(loaded))
        .map_err(|_| LoadError::AlreadyInitialized)?;
    CATALOG
        .get()
        .and_then(Option::as_ref)
        .ok_or(LoadError::AlreadyInitialized)
}

/// Whether the process-wide catalog has been loaded (successfully or not).
pub fn is_initialized() -> bool {
    CATALOG.get().is_some()
}
