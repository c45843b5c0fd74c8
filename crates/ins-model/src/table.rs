//! Enumeration tables.
//!
//! A table owns its members in declaration order and answers lookups by
//! canonical ID (ASCII case-insensitive), by position, by programmatic name
//! and, for enumerations that declare them, by alternative key.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::field::{FieldType, Flag, Integer};
use crate::id::AsIdStr;
use crate::lookup::CaseInsensitiveIndex;
use crate::member::{Link, Member, MemberRecord};
use crate::schema::{ALTERNATIVE_KEYS, FieldKind, TableSchema};

/// An immutable, indexed enumeration.
#[derive(Debug, Serialize)]
pub struct Table {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Items")]
    items: Vec<Member>,
    #[serde(skip)]
    schema: TableSchema,
    #[serde(skip)]
    ids: CaseInsensitiveIndex,
    #[serde(skip)]
    names: HashMap<String, usize>,
    #[serde(skip)]
    alternative_keys: OnceLock<CaseInsensitiveIndex>,
}

impl Table {
    /// Build a table from its schema and member records.
    ///
    /// Reference fields are not resolved here; use
    /// [`Catalog::build`](crate::Catalog::build) for schemas that declare them.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found in the records.
    pub fn new(schema: TableSchema, records: Vec<MemberRecord>) -> Result<Self> {
        Self::with_links(schema, records, Vec::new())
    }

    pub(crate) fn with_links(
        schema: TableSchema,
        records: Vec<MemberRecord>,
        mut links: Vec<BTreeMap<String, Link>>,
    ) -> Result<Self> {
        let table = schema.name.clone();
        let mut ids = CaseInsensitiveIndex::with_capacity(records.len());
        let mut names = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            check_id(&table, record)?;
            if let Err(existing) = ids.insert(&record.id, position) {
                return Err(CatalogError::DuplicateId {
                    table,
                    id: record.id.clone(),
                    existing: records[existing].id.clone(),
                });
            }
            if names.insert(record.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName {
                    table,
                    name: record.name.clone(),
                });
            }
            check_typed_fields(&schema, record)?;
        }

        let parents = resolve_parents(&schema, &records, &ids)?;
        check_forest(&table, &records, &parents)?;

        links.resize_with(records.len(), BTreeMap::new);
        let items: Vec<Member> = records
            .into_iter()
            .zip(parents)
            .zip(links)
            .enumerate()
            .map(|(position, ((record, parent), links))| {
                Member::from_record(record, position, parent, links)
            })
            .collect();

        debug!(
            table = %schema.name,
            members = items.len(),
            hierarchical = schema.hierarchical,
            "built enumeration table"
        );

        Ok(Self {
            name: schema.name.clone(),
            description: schema.description.clone(),
            items,
            schema,
            ids,
            names,
            alternative_keys: OnceLock::new(),
        })
    }

    /// Programmatic label of the enumeration.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Members in declaration order.
    pub fn items(&self) -> &[Member] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up anything that yields a canonical ID.
    pub fn by_id(&self, id: &(impl AsIdStr + ?Sized)) -> Option<&Member> {
        id.as_id_str().and_then(|id| self.by_id_string(id))
    }

    /// Look up a raw string, ignoring ASCII case. Empty input is absent.
    pub fn by_id_string(&self, id: &str) -> Option<&Member> {
        if id.is_empty() {
            return None;
        }
        self.ids.get(id).map(|position| &self.items[position])
    }

    /// Look up by zero-based declaration position (not sort order).
    pub fn by_index(&self, index: usize) -> Option<&Member> {
        self.items.get(index)
    }

    /// Named accessor: look up by the member's programmatic name.
    pub fn by_name(&self, name: &str) -> Option<&Member> {
        self.names.get(name).map(|&position| &self.items[position])
    }

    /// Look up by alternative key or canonical ID, trimmed and case-folded.
    ///
    /// Always absent for enumerations that do not declare `AlternativeKeys`.
    pub fn by_alternative_key(&self, key: &str) -> Option<&Member> {
        if !self.schema.has_alternative_keys() {
            return None;
        }
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        self.alternative_keys()
            .get(key)
            .map(|position| &self.items[position])
    }

    /// The alternative-key index, built on first use.
    pub fn alternative_keys(&self) -> &CaseInsensitiveIndex {
        self.alternative_keys
            .get_or_init(|| self.build_alternative_keys())
    }

    fn build_alternative_keys(&self) -> CaseInsensitiveIndex {
        let mut index = CaseInsensitiveIndex::with_capacity(self.items.len() * 2);
        for member in &self.items {
            // Canonical IDs are unique, so these never collide with each other.
            let _ = index.insert(member.id(), member.position());
        }
        for member in &self.items {
            let Some(raw) = member.meta(ALTERNATIVE_KEYS) else {
                continue;
            };
            for key in raw.split(',').map(str::trim).filter(|key| !key.is_empty()) {
                if let Err(owner) = index.insert(key, member.position())
                    && owner != member.position()
                {
                    warn!(
                        table = %self.name,
                        key = %key,
                        member = %member.id(),
                        owner = %self.items[owner].id(),
                        "alternative key already claimed; keeping first owner"
                    );
                }
            }
        }
        debug!(table = %self.name, keys = index.len(), "built alternative-key index");
        index
    }

    /// Canonical spelling of an ID, if it resolves.
    pub fn canonical(&self, id: &str) -> Option<&str> {
        self.by_id_string(id).map(Member::id)
    }

    /// Parent of a member of this table.
    pub fn parent_of(&self, member: &Member) -> Option<&Member> {
        member
            .parent_position()
            .and_then(|position| self.items.get(position))
    }

    /// Members whose parent is `member`, in declaration order.
    pub fn children_of(&self, member: &Member) -> Vec<&Member> {
        self.items
            .iter()
            .filter(|item| item.parent_position() == Some(member.position()))
            .collect()
    }

    /// Members ordered by sort order; ties keep declaration order.
    pub fn sorted(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.items.iter().collect();
        members.sort_by_key(|member| member.sort_order());
        members
    }
}

/// IDs must be non-empty and need no escaping in either wire format.
fn check_id(table: &str, record: &MemberRecord) -> Result<()> {
    if record.id.is_empty() {
        return Err(CatalogError::EmptyId {
            table: table.to_string(),
            name: record.name.clone(),
        });
    }
    if record
        .id
        .chars()
        .any(|c| matches!(c, '"' | '\\' | '<' | '>' | '&') || c.is_control())
    {
        return Err(CatalogError::InvalidField {
            table: table.to_string(),
            id: record.id.clone(),
            field: "Value".to_string(),
            value: record.id.clone(),
            expected: "identifier without escapable characters",
        });
    }
    Ok(())
}

fn check_typed_fields(schema: &TableSchema, record: &MemberRecord) -> Result<()> {
    for field in &schema.fields {
        let Some(value) = record.metadata.get(&field.key) else {
            continue;
        };
        let expected = match field.kind {
            FieldKind::Integer if Integer::parse(value).is_none() => Integer::LABEL,
            FieldKind::Flag if Flag::parse(value).is_none() => Flag::LABEL,
            _ => continue,
        };
        return Err(CatalogError::InvalidField {
            table: schema.name.clone(),
            id: record.id.clone(),
            field: field.key.clone(),
            value: value.clone(),
            expected,
        });
    }
    Ok(())
}

fn resolve_parents(
    schema: &TableSchema,
    records: &[MemberRecord],
    ids: &CaseInsensitiveIndex,
) -> Result<Vec<Option<usize>>> {
    records
        .iter()
        .map(|record| {
            let Some(parent) = record.parent.as_deref().filter(|p| !p.is_empty()) else {
                return Ok(None);
            };
            if !schema.hierarchical {
                return Err(CatalogError::ParentsNotDeclared {
                    table: schema.name.clone(),
                    id: record.id.clone(),
                });
            }
            ids.get(parent)
                .map(Some)
                .ok_or_else(|| CatalogError::UnknownParent {
                    table: schema.name.clone(),
                    id: record.id.clone(),
                    parent: parent.to_string(),
                })
        })
        .collect()
}

/// Every parent chain must reach a root within `len` steps.
fn check_forest(table: &str, records: &[MemberRecord], parents: &[Option<usize>]) -> Result<()> {
    for (start, record) in records.iter().enumerate() {
        let mut current = parents[start];
        let mut steps = 0;
        while let Some(position) = current {
            steps += 1;
            if position == start || steps > records.len() {
                return Err(CatalogError::ParentCycle {
                    table: table.to_string(),
                    id: record.id.clone(),
                });
            }
            current = parents[position];
        }
    }
    Ok(())
}
