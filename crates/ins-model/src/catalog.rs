//! The catalog: every enumeration table of the process, with
//! cross-enumeration links resolved at construction.

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::lookup::CaseInsensitiveIndex;
use crate::member::{Link, Member, MemberRecord};
use crate::schema::TableSchema;
use crate::table::Table;

/// Schema plus member records for one enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub schema: TableSchema,
    pub members: Vec<MemberRecord>,
}

impl TableDefinition {
    pub fn new(schema: TableSchema, members: Vec<MemberRecord>) -> Self {
        Self { schema, members }
    }
}

/// A set of enumeration tables, immutable once built.
#[derive(Debug)]
pub struct Catalog {
    tables: Vec<Table>,
    names: CaseInsensitiveIndex,
}

impl Catalog {
    /// Build every table, resolving reference fields.
    ///
    /// Tables are constructed in dependency order so that each reference
    /// field is resolved against an already-built table. Resolved reference
    /// values are rewritten to the target member's canonical spelling. The
    /// built tables keep their declaration order.
    ///
    /// # Errors
    ///
    /// Fails on duplicate table names, references to unknown tables,
    /// reference cycles, unresolved reference values, and any table
    /// invariant violation.
    pub fn build(definitions: Vec<TableDefinition>) -> Result<Self> {
        let mut declared = CaseInsensitiveIndex::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            if declared.insert(&definition.schema.name, position).is_err() {
                return Err(CatalogError::DuplicateTable {
                    table: definition.schema.name.clone(),
                });
            }
        }

        let order = dependency_order(&definitions, &declared)?;
        let mut pending: Vec<Option<TableDefinition>> = definitions.into_iter().map(Some).collect();
        let mut built: Vec<Option<Table>> = pending.iter().map(|_| None).collect();

        for position in order {
            let Some(definition) = pending[position].take() else {
                continue;
            };
            let TableDefinition {
                schema,
                mut members,
            } = definition;
            let links = resolve_links(&schema, &mut members, &built, &declared)?;
            built[position] = Some(Table::with_links(schema, members, links)?);
        }

        // Every position is built, so indices still match `declared`.
        let tables: Vec<Table> = built.into_iter().flatten().collect();
        debug!(tables = tables.len(), "built enumeration catalog");
        Ok(Self {
            tables,
            names: declared,
        })
    }

    /// Look up a table by programmatic name (ASCII case-insensitive).
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.names.get(name).map(|position| &self.tables[position])
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Follow a reference field of `member` to the linked member.
    pub fn join(&self, member: &Member, key: &str) -> Option<&Member> {
        member.link(key).and_then(|link| self.resolve(link))
    }

    /// Table holding the member a link points to.
    pub fn link_table(&self, link: Link) -> Option<&Table> {
        self.tables.get(link.table)
    }

    /// All links of `member` as `(field, linked member)` pairs.
    pub fn joins<'a>(&'a self, member: &'a Member) -> impl Iterator<Item = (&'a str, &'a Member)> {
        member
            .links()
            .filter_map(|(key, link)| self.resolve(link).map(|linked| (key, linked)))
    }

    fn resolve(&self, link: Link) -> Option<&Member> {
        self.tables.get(link.table)?.by_index(link.member)
    }
}

/// Kahn's algorithm over reference fields, stable in declaration order.
fn dependency_order(
    definitions: &[TableDefinition],
    declared: &CaseInsensitiveIndex,
) -> Result<Vec<usize>> {
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); definitions.len()];
    let mut remaining: Vec<usize> = vec![0; definitions.len()];

    for (position, definition) in definitions.iter().enumerate() {
        let mut targets = Vec::new();
        for (field, target) in definition.schema.references() {
            let Some(target_position) = declared.get(target) else {
                return Err(CatalogError::UnknownTable {
                    table: definition.schema.name.clone(),
                    field: field.to_string(),
                    target: target.to_string(),
                });
            };
            if !targets.contains(&target_position) {
                targets.push(target_position);
            }
        }
        remaining[position] = targets.len();
        for target in targets {
            dependents[target].push(position);
        }
    }

    let mut ready: VecDeque<usize> = (0..definitions.len())
        .filter(|&position| remaining[position] == 0)
        .collect();
    let mut order = Vec::with_capacity(definitions.len());
    while let Some(position) = ready.pop_front() {
        order.push(position);
        for &dependent in &dependents[position] {
            remaining[dependent] -= 1;
            if remaining[dependent] == 0 {
                ready.push_back(dependent);
            }
        }
    }

    if order.len() < definitions.len() {
        let tables = definitions
            .iter()
            .enumerate()
            .filter(|(position, _)| remaining[*position] > 0)
            .map(|(_, definition)| definition.schema.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CatalogError::ReferenceCycle { tables });
    }
    Ok(order)
}

fn resolve_links(
    schema: &TableSchema,
    members: &mut [MemberRecord],
    tables: &[Option<Table>],
    names: &CaseInsensitiveIndex,
) -> Result<Vec<BTreeMap<String, Link>>> {
    let mut resolved = Vec::with_capacity(members.len());
    for record in members.iter_mut() {
        let mut links = BTreeMap::new();
        for (field, target) in schema.references() {
            let Some(value) = record.metadata.get_mut(field) else {
                continue;
            };
            let built = names
                .get(target)
                .and_then(|position| Some((position, tables.get(position)?.as_ref()?)));
            let Some((table_position, table)) = built else {
                return Err(CatalogError::UnknownTable {
                    table: schema.name.clone(),
                    field: field.to_string(),
                    target: target.to_string(),
                });
            };
            let Some(linked) = table.by_id_string(value.trim()) else {
                return Err(CatalogError::UnresolvedReference {
                    table: schema.name.clone(),
                    id: record.id.clone(),
                    field: field.to_string(),
                    value: value.clone(),
                    target: target.to_string(),
                });
            };
            *value = linked.id().to_string();
            links.insert(
                field.to_string(),
                Link {
                    table: table_position,
                    member: linked.position(),
                },
            );
        }
        resolved.push(links);
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn branch() -> TableDefinition {
        TableDefinition::new(
            TableSchema::new("MilitaryBranch", "Military branch"),
            vec![
                MemberRecord::new("AirForce", "AirForce"),
                MemberRecord::new("Army", "Army"),
            ],
        )
    }

    fn rank() -> TableDefinition {
        TableDefinition::new(
            TableSchema::new("MilitaryRank", "Military rank"),
            vec![MemberRecord::new("E1", "EnlistedE1")],
        )
    }

    fn service() -> TableDefinition {
        TableDefinition::new(
            TableSchema::new("MilitaryService", "Military service")
                .with_field("Branch", FieldKind::Reference("MilitaryBranch".to_string()))
                .with_field("Rank", FieldKind::Reference("MilitaryRank".to_string())),
            vec![
                MemberRecord::new("1", "AirForceE1")
                    .with_meta("Branch", "airforce")
                    .with_meta("Rank", "E1"),
            ],
        )
    }

    #[test]
    fn joins_resolve_regardless_of_declaration_order() {
        let catalog = Catalog::build(vec![service(), branch(), rank()]).expect("build catalog");
        let table = catalog.table("militaryservice").expect("service table");
        let member = table.by_id_string("1").expect("member");

        let branch = catalog.join(member, "Branch").expect("branch");
        assert_eq!(branch.id(), "AirForce");
        assert_eq!(member.meta("Branch"), Some("AirForce"));

        let rank = catalog.join(member, "Rank").expect("rank");
        assert_eq!(rank.name(), "EnlistedE1");
        assert!(catalog.join(member, "Missing").is_none());
        assert_eq!(catalog.joins(member).count(), 2);

        let names: Vec<&str> = catalog.tables().iter().map(Table::name).collect();
        assert_eq!(names, ["MilitaryService", "MilitaryBranch", "MilitaryRank"]);
    }

    #[test]
    fn unknown_target_table_is_an_error() {
        let err = Catalog::build(vec![service(), branch()]).expect_err("unknown table");
        assert!(matches!(err, CatalogError::UnknownTable { .. }));
    }

    #[test]
    fn unresolved_reference_is_an_error() {
        let mut bad = service();
        bad.members[0]
            .metadata
            .insert("Branch".to_string(), "Navy".to_string());
        let err = Catalog::build(vec![branch(), rank(), bad]).expect_err("unresolved");
        assert!(matches!(err, CatalogError::UnresolvedReference { .. }));
    }

    #[test]
    fn reference_cycles_are_detected() {
        let a = TableDefinition::new(
            TableSchema::new("A", "").with_field("B", FieldKind::Reference("B".to_string())),
            vec![],
        );
        let b = TableDefinition::new(
            TableSchema::new("B", "").with_field("A", FieldKind::Reference("A".to_string())),
            vec![],
        );
        let err = Catalog::build(vec![a, b]).expect_err("cycle");
        assert_eq!(
            err,
            CatalogError::ReferenceCycle {
                tables: "A, B".to_string()
            }
        );
    }

    #[test]
    fn duplicate_table_names_are_rejected() {
        let err = Catalog::build(vec![branch(), branch()]).expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateTable { .. }));
    }
}
