//! Member records: the rows of an enumeration.

use std::collections::BTreeMap;

use serde::Serialize;

/// Input row for building a table.
///
/// # Example
///
/// ```
/// use ins_model::MemberRecord;
///
/// let record = MemberRecord::new("VA", "Virginia")
///     .with_description("Virginia")
///     .with_sort_order(46)
///     .with_meta("DisplayName", "Virginia");
/// assert_eq!(record.metadata.get("DisplayName").map(String::as_str), Some("Virginia"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRecord {
    /// Canonical identifier (the wire form).
    pub id: String,
    /// Programmatic label, used as the named accessor.
    pub name: String,
    /// Human-readable phrase, may be empty.
    pub description: String,
    /// Intended display order. Defaults to the declaration position.
    pub sort_order: Option<i64>,
    /// Canonical ID of a parent member in the same table.
    pub parent: Option<String>,
    /// Free-form metadata.
    pub metadata: BTreeMap<String, String>,
}

impl MemberRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Position of a member in another table of the same catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub table: usize,
    pub member: usize,
}

/// One row of an enumeration table.
///
/// Serializes as a member document: `Value`, `Description` (omitted when
/// empty), `Meta` (omitted when empty) and `Name`. Parent and links are
/// never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    #[serde(rename = "Value")]
    id: String,
    #[serde(rename = "Description", skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(rename = "Meta", skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(skip)]
    sort_order: i64,
    #[serde(skip)]
    position: usize,
    #[serde(skip)]
    parent: Option<usize>,
    #[serde(skip)]
    links: BTreeMap<String, Link>,
}

impl Member {
    pub(crate) fn from_record(
        record: MemberRecord,
        position: usize,
        parent: Option<usize>,
        links: BTreeMap<String, Link>,
    ) -> Self {
        let sort_order = record
            .sort_order
            .unwrap_or_else(|| i64::try_from(position).unwrap_or(i64::MAX));
        Self {
            id: record.id,
            description: record.description,
            metadata: record.metadata,
            name: record.name,
            sort_order,
            position,
            parent,
            links,
        }
    }

    /// Canonical identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sort_order(&self) -> i64 {
        self.sort_order
    }

    /// Zero-based declaration position within its table.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Declaration position of the parent member, if any.
    pub fn parent_position(&self) -> Option<usize> {
        self.parent
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn link(&self, key: &str) -> Option<Link> {
        self.links.get(key).copied()
    }

    pub fn links(&self) -> impl Iterator<Item = (&str, Link)> {
        self.links.iter().map(|(key, link)| (key.as_str(), *link))
    }
}
