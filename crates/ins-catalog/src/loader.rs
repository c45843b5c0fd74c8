//! Catalog loading from the CSV schema files.
//!
//! # CSV Structure
//!
//! - `Enumerations.csv`: `Name`, `Description`, `Parents (Yes/No)`, `Fields`
//!   where `Fields` is a `;`-separated list of `Key:kind` declarations.
//! - `Members.csv`: `Enumeration`, `Value`, `Name`, `Description`,
//!   `Sort Order`, `Parent`, `Metadata` where `Metadata` is a `;`-separated
//!   list of `Key=Value` pairs.

use std::collections::HashMap;
use std::fs;

use ins_model::{Catalog, FieldSpec, MemberRecord, TableDefinition, TableSchema};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::{CatalogConfig, CatalogSource};
use crate::embedded;
use crate::error::{LoadError, Result};

// =============================================================================
// Public Loading Functions
// =============================================================================

/// Load the catalog described by `config`.
pub fn load(config: &CatalogConfig) -> Result<Catalog> {
    match &config.source {
        CatalogSource::Embedded => load_from_str(
            embedded::ENUMERATIONS,
            embedded::ENUMERATIONS_FILE,
            embedded::MEMBERS,
            embedded::MEMBERS_FILE,
        ),
        CatalogSource::Directory(dir) => {
            let read = |file: &str| {
                let path = dir.join(file);
                fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
            };
            let enumerations = read(embedded::ENUMERATIONS_FILE)?;
            let members = read(embedded::MEMBERS_FILE)?;
            tracing::debug!(dir = %dir.display(), "loading catalog from directory");
            load_from_str(
                &enumerations,
                &dir.join(embedded::ENUMERATIONS_FILE).display().to_string(),
                &members,
                &dir.join(embedded::MEMBERS_FILE).display().to_string(),
            )
        }
    }
}

/// Load a catalog from CSV string content. The file names label errors.
pub fn load_from_str(
    enumerations: &str,
    enumerations_file: &str,
    members: &str,
    members_file: &str,
) -> Result<Catalog> {
    let definitions =
        definitions_from_str(enumerations, enumerations_file, members, members_file)?;
    let member_count: usize = definitions.iter().map(|d| d.members.len()).sum();
    let catalog = Catalog::build(definitions)?;
    tracing::debug!(
        tables = catalog.tables().len(),
        members = member_count,
        "loaded enumeration catalog"
    );
    Ok(catalog)
}

/// Parse both files into table definitions without building the catalog.
pub fn definitions_from_str(
    enumerations: &str,
    enumerations_file: &str,
    members: &str,
    members_file: &str,
) -> Result<Vec<TableDefinition>> {
    let mut definitions = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for row in read_rows::<EnumerationRow>(enumerations, enumerations_file)? {
        if row.name.is_empty() {
            continue;
        }
        let schema = row.into_schema(enumerations_file)?;
        by_name.insert(schema.name.clone(), definitions.len());
        definitions.push(TableDefinition::new(schema, Vec::new()));
    }

    for row in read_rows::<MemberRow>(members, members_file)? {
        if row.enumeration.is_empty() {
            continue;
        }
        let Some(&index) = by_name.get(&row.enumeration) else {
            return Err(LoadError::InvalidValue {
                field: "Enumeration",
                value: row.enumeration,
                file: members_file.to_string(),
            });
        };
        definitions[index]
            .members
            .push(row.into_record(members_file)?);
    }

    let empty: Vec<&str> = definitions
        .iter()
        .filter(|d| d.members.is_empty())
        .map(|d| d.schema.name.as_str())
        .collect();
    if !empty.is_empty() {
        tracing::warn!(
            file = %members_file,
            empty_count = empty.len(),
            names = ?empty,
            "catalog declares enumerations with no members"
        );
    }

    Ok(definitions)
}

// =============================================================================
// CSV Row Types
// =============================================================================

/// Row from Enumerations.csv.
#[derive(Debug, Deserialize)]
struct EnumerationRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Parents (Yes/No)", default)]
    parents: String,
    #[serde(rename = "Fields", default)]
    fields: String,
}

impl EnumerationRow {
    fn into_schema(self, file: &str) -> Result<TableSchema> {
        let mut schema = TableSchema::new(self.name, self.description);
        if parse_yes_no(&self.parents, "Parents (Yes/No)", file)? {
            schema = schema.with_parents();
        }
        for declaration in split_list(&self.fields) {
            let spec: FieldSpec = declaration.parse().map_err(|_| LoadError::InvalidValue {
                field: "Fields",
                value: declaration.to_string(),
                file: file.to_string(),
            })?;
            schema = schema.with_field(spec.key, spec.kind);
        }
        Ok(schema)
    }
}

/// Row from Members.csv.
#[derive(Debug, Deserialize)]
struct MemberRow {
    #[serde(rename = "Enumeration")]
    enumeration: String,
    #[serde(rename = "Value")]
    value: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Sort Order", default)]
    sort_order: String,
    #[serde(rename = "Parent", default)]
    parent: String,
    #[serde(rename = "Metadata", default)]
    metadata: String,
}

impl MemberRow {
    fn into_record(self, file: &str) -> Result<MemberRecord> {
        let mut record = MemberRecord::new(self.value, self.name).with_description(self.description);

        if let Some(sort_order) = non_empty(&self.sort_order) {
            let parsed = sort_order.parse().map_err(|_| LoadError::InvalidValue {
                field: "Sort Order",
                value: sort_order.to_string(),
                file: file.to_string(),
            })?;
            record = record.with_sort_order(parsed);
        }
        if let Some(parent) = non_empty(&self.parent) {
            record = record.with_parent(parent);
        }
        for pair in split_list(&self.metadata) {
            let Some((key, value)) = pair.split_once('=') else {
                return Err(LoadError::InvalidValue {
                    field: "Metadata",
                    value: pair.to_string(),
                    file: file.to_string(),
                });
            };
            record = record.with_meta(key.trim(), value.trim());
        }
        Ok(record)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn read_rows<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    reader
        .deserialize::<T>()
        .map(|row| {
            row.map_err(|e| LoadError::CsvParse {
                file: file.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

fn parse_yes_no(raw: &str, field: &'static str, file: &str) -> Result<bool> {
    match raw {
        "" => Ok(false),
        s if s.eq_ignore_ascii_case("yes") => Ok(true),
        s if s.eq_ignore_ascii_case("no") => Ok(false),
        other => Err(LoadError::InvalidValue {
            field,
            value: other.to_string(),
            file: file.to_string(),
        }),
    }
}

/// Parse semicolon-separated entries.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Return Some(value) if non-empty, None otherwise.
fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
