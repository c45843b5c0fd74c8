//! Enumeration schemas: the static description a table is built from.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Metadata key holding comma-separated alternative lookup keys.
pub const ALTERNATIVE_KEYS: &str = "AlternativeKeys";

/// Declared type of a metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Comma-separated list of values.
    List,
    /// Signed integer.
    Integer,
    /// Boolean flag (`true`/`false`, `yes`/`no`).
    Flag,
    /// Canonical ID of a member of another enumeration.
    Reference(String),
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::List => "list",
            Self::Integer => "integer",
            Self::Flag => "flag",
            Self::Reference(_) => "reference",
        }
    }

    /// Target enumeration of a reference field.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Reference(target) => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(target) => write!(f, "ref({target})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Error returned when a field declaration cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field declaration '{0}'")]
pub struct FieldSpecError(pub String);

impl FromStr for FieldKind {
    type Err = FieldSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        match raw.to_ascii_lowercase().as_str() {
            "text" => return Ok(Self::Text),
            "list" => return Ok(Self::List),
            "integer" | "int" => return Ok(Self::Integer),
            "flag" | "bool" => return Ok(Self::Flag),
            _ => {}
        }
        raw.strip_prefix("ref(")
            .and_then(|rest| rest.strip_suffix(')'))
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .map(|target| Self::Reference(target.to_string()))
            .ok_or_else(|| FieldSpecError(s.to_string()))
    }
}

/// A typed metadata field declared by an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: String,
    pub kind: FieldKind,
}

impl FromStr for FieldSpec {
    type Err = FieldSpecError;

    /// Parse a `Key:kind` declaration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, kind) = s.split_once(':').ok_or_else(|| FieldSpecError(s.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(FieldSpecError(s.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            kind: kind.parse().map_err(|_| FieldSpecError(s.to_string()))?,
        })
    }
}

/// Static description of one enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    /// Programmatic label of the enumeration (e.g., `UsState`).
    pub name: String,
    /// Human-readable label.
    pub description: String,
    /// Whether members may name a parent member.
    pub hierarchical: bool,
    /// Typed metadata fields.
    pub fields: Vec<FieldSpec>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hierarchical: false,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parents(mut self) -> Self {
        self.hierarchical = true;
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            key: key.into(),
            kind,
        });
        self
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn has_alternative_keys(&self) -> bool {
        self.field(ALTERNATIVE_KEYS).is_some()
    }

    /// Reference fields as `(key, target enumeration)` pairs.
    pub fn references(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|field| field.kind.target().map(|target| (field.key.as_str(), target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_declarations() {
        let spec: FieldSpec = "Branch:ref(MilitaryBranch)".parse().expect("parse");
        assert_eq!(spec.key, "Branch");
        assert_eq!(spec.kind, FieldKind::Reference("MilitaryBranch".to_string()));

        let spec: FieldSpec = " Months : integer ".parse().expect("parse");
        assert_eq!(spec.key, "Months");
        assert_eq!(spec.kind, FieldKind::Integer);

        assert!("Months".parse::<FieldSpec>().is_err());
        assert!(":text".parse::<FieldSpec>().is_err());
        assert!("Rank:ref()".parse::<FieldSpec>().is_err());
        assert!("Rank:decimal".parse::<FieldSpec>().is_err());
    }

    #[test]
    fn field_kind_display_round_trips() {
        for kind in [
            FieldKind::Text,
            FieldKind::List,
            FieldKind::Integer,
            FieldKind::Flag,
            FieldKind::Reference("UsState".to_string()),
        ] {
            assert_eq!(kind.to_string().parse::<FieldKind>(), Ok(kind));
        }
    }

    #[test]
    fn schema_reports_alternative_keys_and_references() {
        let schema = TableSchema::new("MilitaryService", "Military service")
            .with_field("Branch", FieldKind::Reference("MilitaryBranch".to_string()))
            .with_field(ALTERNATIVE_KEYS, FieldKind::List);
        assert!(schema.has_alternative_keys());
        assert_eq!(
            schema.references().collect::<Vec<_>>(),
            vec![("Branch", "MilitaryBranch")]
        );
    }
}
