//! Generic contract for closed-set, string-keyed enumerations.
//!
//! This crate provides:
//!
//! - **Member records** and **tables** with case-insensitive, positional,
//!   named and alternative-key lookups
//! - A **catalog** that builds tables and resolves cross-enumeration links
//! - **Strict identifiers** ([`Id`]) that reject unknown input
//! - **Validated identifiers** ([`ValidatedId`]) that capture input and
//!   record errors instead of failing
//! - **Codecs** for JSON and XML ([`codec`])
//!
//! Concrete enumerations are data: a kind is a marker type implementing
//! [`Enumeration`], and its members live in the catalog.
//!
//! # Example
//!
//! ```
//! use ins_model::{MemberRecord, Table, TableSchema};
//!
//! let table = Table::new(
//!     TableSchema::new("CreditCard", "Credit card brand"),
//!     vec![
//!         MemberRecord::new("visa", "Visa"),
//!         MemberRecord::new("amex", "AmericanExpress"),
//!     ],
//! )?;
//!
//! assert_eq!(table.by_id_string("VISA").map(|m| m.id()), Some("visa"));
//! assert_eq!(table.by_index(1).map(|m| m.name()), Some("AmericanExpress"));
//! # Ok::<(), ins_model::CatalogError>(())
//! ```

pub mod catalog;
pub mod codec;
pub mod error;
pub mod field;
pub mod id;
pub mod kind;
pub mod lookup;
pub mod member;
pub mod schema;
pub mod table;
pub mod validated;

pub use catalog::{Catalog, TableDefinition};
pub use error::{CatalogError, CodecError, Result, WireFormat};
pub use field::{Field, FieldType, Flag, Integer, List, Text};
pub use id::{AsIdStr, Id};
pub use kind::{AlternativeKeyed, Enumeration, Hierarchical};
pub use member::{Link, Member, MemberRecord};
pub use schema::{ALTERNATIVE_KEYS, FieldKind, FieldSpec, FieldSpecError, TableSchema};
pub use table::Table;
pub use validated::ValidatedId;
