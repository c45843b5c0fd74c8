//! Insurance enumeration catalog.
//!
//! This crate provides:
//!
//! - **Embedded catalog data** ([`embedded`]): the enumeration and member
//!   CSV files, compiled into the binary
//! - **Loading** ([`loader`]) from embedded data or an on-disk directory
//! - **The process-wide catalog** ([`catalog`], [`install`])
//! - **Marker types** ([`kinds`]) for every enumeration, with typed
//!   metadata fields and runtime dispatch by name ([`visit_kind`])
//!
//! # Catalog Directory Structure
//!
//! ```text
//! data/catalog/
//! ├── Enumerations.csv   # Name, Description, Parents (Yes/No), Fields
//! └── Members.csv        # Enumeration, Value, Name, Description, Sort Order, Parent, Metadata
//! ```
//!
//! Set `INS_CATALOG_DIR` to load the same two files from another directory.
//!
//! # Example
//!
//! ```
//! use ins_catalog::kinds::{MilitaryService, UsState};
//! use ins_model::Id;
//!
//! let state: Id<UsState> = "va".parse()?;
//! assert_eq!(state.to_id_string(), "VA");
//!
//! let service = Id::<MilitaryService>::new("1");
//! assert_eq!(MilitaryService::branch(&service).to_id_string(), "AirForce");
//! # Ok::<(), ins_model::CodecError>(())
//! ```

pub mod config;
pub mod embedded;
pub mod error;
pub mod kinds;
pub mod loader;
pub mod registry;

pub use config::{CATALOG_ENV_VAR, CatalogConfig, CatalogSource};
pub use error::{LoadError, Result};
pub use kinds::{KIND_NAMES, KindVisitor, visit_kind};
pub use loader::{load, load_from_str};
pub use registry::{catalog, install, is_initialized};
