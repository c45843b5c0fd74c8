//! Error types for catalog construction and identifier codecs.

use thiserror::Error;

/// Violations of the catalog invariants detected while building tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// A member was declared with an empty identifier.
    #[error("{table}: member '{name}' has an empty identifier")]
    EmptyId { table: String, name: String },

    /// Two members share an identifier under ASCII case folding.
    #[error("{table}: identifier '{id}' collides with '{existing}'")]
    DuplicateId {
        table: String,
        id: String,
        existing: String,
    },

    /// Two members share a programmatic name.
    #[error("{table}: member name '{name}' is declared twice")]
    DuplicateName { table: String, name: String },

    /// A member names a parent while its table declares no hierarchy.
    #[error("{table}: member '{id}' has a parent but the enumeration declares none")]
    ParentsNotDeclared { table: String, id: String },

    /// A parent reference does not resolve within the same table.
    #[error("{table}: parent '{parent}' of member '{id}' is not a member")]
    UnknownParent {
        table: String,
        id: String,
        parent: String,
    },

    /// Following parents from a member never reaches a root.
    #[error("{table}: parent chain of member '{id}' contains a cycle")]
    ParentCycle { table: String, id: String },

    /// Two enumerations share a programmatic name.
    #[error("enumeration '{table}' is declared twice")]
    DuplicateTable { table: String },

    /// A reference field points at an enumeration that is not declared.
    #[error("{table}: field '{field}' references unknown enumeration '{target}'")]
    UnknownTable {
        table: String,
        field: String,
        target: String,
    },

    /// Reference fields between enumerations form a cycle.
    #[error("reference cycle between enumerations: {tables}")]
    ReferenceCycle { tables: String },

    /// A reference field value does not resolve in its target table.
    #[error("{table}: member '{id}' field '{field}' value '{value}' is not a member of {target}")]
    UnresolvedReference {
        table: String,
        id: String,
        field: String,
        value: String,
        target: String,
    },

    /// A typed field value cannot be parsed as its declared kind.
    #[error("{table}: member '{id}' field '{field}' value '{value}' is not a valid {expected}")]
    InvalidField {
        table: String,
        id: String,
        field: String,
        value: String,
        expected: &'static str,
    },
}

/// Wire format named in codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    /// Object notation (JSON).
    Json,
    /// Element notation (XML).
    Xml,
}

impl std::fmt::Display for WireFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Xml => f.write_str("XML"),
        }
    }
}

/// Errors raised while encoding or decoding identifiers.
///
/// Strict identifiers surface these directly. Validated identifiers record
/// them in their error accumulator instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A strict identifier holds a value that is not a member.
    #[error("cannot encode '{value}': not a member of {enumeration}")]
    EncodeInvalid {
        enumeration: &'static str,
        value: String,
    },

    /// The writer failed while emitting an identifier.
    #[error("failed to write {format} for {enumeration}: {message}")]
    EncodeFailed {
        enumeration: &'static str,
        format: WireFormat,
        message: String,
    },

    /// A decoder observed a non-empty value that is not a member.
    #[error("cannot decode '{value}': not a member of {enumeration}")]
    DecodeInvalid {
        enumeration: &'static str,
        value: String,
    },

    /// The underlying wire-format decode failed.
    #[error("malformed {format} input for {enumeration}: {message}")]
    DecodeMalformed {
        enumeration: &'static str,
        format: WireFormat,
        message: String,
    },
}

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;
