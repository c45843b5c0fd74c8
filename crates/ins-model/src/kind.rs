//! Enumeration kinds: compile-time handles on catalog tables.

use crate::catalog::Catalog;
use crate::table::Table;

/// A concrete enumeration of the catalog.
///
/// Implementors are usually uninhabited marker types. Every query made
/// through [`Id`](crate::Id) or [`ValidatedId`](crate::ValidatedId) is total:
/// when the catalog or table is unavailable the result is absent.
pub trait Enumeration: 'static {
    /// Programmatic name of the table backing this kind.
    const NAME: &'static str;

    /// The catalog holding this kind's table.
    fn catalog() -> Option<&'static Catalog>;

    fn table() -> Option<&'static Table> {
        Self::catalog()?.table(Self::NAME)
    }
}

/// Kinds whose members may name a parent member.
pub trait Hierarchical: Enumeration {}

/// Kinds whose members declare `AlternativeKeys`.
pub trait AlternativeKeyed: Enumeration {}
