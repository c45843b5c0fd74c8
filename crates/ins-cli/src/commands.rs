//! Subcommand implementations. Each returns the text to print.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use ins_catalog::{KindVisitor, visit_kind};
use ins_model::codec::{json, xml};
use ins_model::{Catalog, CodecError, Enumeration, Id, Member, Table, ValidatedId, WireFormat};
use serde::Serialize;
use tracing::debug;

use crate::summary::{members_table, tables_table};

/// Member document with its resolved parent and links.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    #[serde(flatten)]
    pub member: &'a Member,
    #[serde(rename = "Parent", skip_serializing_if = "Option::is_none")]
    pub parent: Option<&'a str>,
    #[serde(rename = "Links", skip_serializing_if = "BTreeMap::is_empty")]
    pub links: BTreeMap<&'a str, &'a str>,
}

/// Outcome of a validated decode.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    pub valid: bool,
    pub value: Option<String>,
    pub captured: Option<String>,
    pub errors: Vec<String>,
}

pub fn run_tables() -> Result<String> {
    Ok(tables_table(catalog()?).to_string())
}

pub fn run_members(name: &str, sorted: bool, as_json: bool) -> Result<String> {
    let table = table(catalog()?, name)?;
    let members: Vec<&Member> = if sorted {
        table.sorted()
    } else {
        table.items().iter().collect()
    };
    if as_json {
        return serde_json::to_string_pretty(&members).context("serialize members");
    }
    Ok(members_table(table, &members).to_string())
}

pub fn run_lookup(name: &str, value: &str, alternative: bool) -> Result<String> {
    let catalog = catalog()?;
    let table = table(catalog, name)?;
    if alternative && !table.schema().has_alternative_keys() {
        return Err(anyhow!("{} has no alternative keys", table.name()));
    }
    let found = if alternative {
        table.by_alternative_key(value)
    } else {
        table.by_id_string(value)
    };
    let member =
        found.with_context(|| format!("'{value}' is not a member of {}", table.name()))?;

    let parent = table.schema().hierarchical.then(|| {
        table
            .parent_of(member)
            .map_or_else(|| member.id(), Member::id)
    });
    let report = LookupReport {
        member,
        parent,
        links: catalog
            .joins(member)
            .map(|(key, linked)| (key, linked.id()))
            .collect(),
    };
    serde_json::to_string_pretty(&report).context("serialize lookup")
}

pub fn run_encode(name: &str, value: &str, format: WireFormat, tag: Option<&str>) -> Result<String> {
    let encoded = visit_kind(
        name,
        Encode {
            value,
            format,
            tag,
        },
    )
    .ok_or_else(|| unknown_kind(name))?;
    Ok(encoded?)
}

pub fn run_decode(name: &str, input: &str, format: WireFormat, validated: bool) -> Result<String> {
    if validated {
        let report = visit_kind(name, DecodeValidated { input, format })
            .ok_or_else(|| unknown_kind(name))??;
        return serde_json::to_string_pretty(&report).context("serialize decode report");
    }
    let decoded = visit_kind(name, DecodeStrict { input, format }).ok_or_else(|| unknown_kind(name))?;
    Ok(decoded?)
}

fn catalog() -> Result<&'static Catalog> {
    ins_catalog::catalog().context("the enumeration catalog is unavailable")
}

fn table<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Table> {
    catalog
        .table(name)
        .ok_or_else(|| unknown_kind(name))
}

fn unknown_kind(name: &str) -> anyhow::Error {
    anyhow!("unknown enumeration '{name}'")
}

struct Encode<'a> {
    value: &'a str,
    format: WireFormat,
    tag: Option<&'a str>,
}

impl KindVisitor for Encode<'_> {
    type Output = Result<String, CodecError>;

    fn visit<E: Enumeration>(self) -> Self::Output {
        let id = Id::<E>::new(self.value);
        match self.format {
            WireFormat::Json => {
                json::marshal(&id).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            }
            WireFormat::Xml => xml::to_element(self.tag.unwrap_or(E::NAME), &id),
        }
    }
}

/// Prints the canonical ID, or nothing for the absent identifier.
struct DecodeStrict<'a> {
    input: &'a str,
    format: WireFormat,
}

impl KindVisitor for DecodeStrict<'_> {
    type Output = Result<String, CodecError>;

    fn visit<E: Enumeration>(self) -> Self::Output {
        let id: Id<E> = match self.format {
            WireFormat::Json => json::unmarshal(self.input.as_bytes())?,
            WireFormat::Xml => xml::from_element(self.input)?,
        };
        Ok(id.to_id_string())
    }
}

struct DecodeValidated<'a> {
    input: &'a str,
    format: WireFormat,
}

impl KindVisitor for DecodeValidated<'_> {
    type Output = Result<DecodeReport, CodecError>;

    fn visit<E: Enumeration>(self) -> Self::Output {
        let mut id = ValidatedId::<E>::none();
        match self.format {
            WireFormat::Json => json::unmarshal_validated(&mut id, self.input.as_bytes()),
            WireFormat::Xml => xml::from_element_validated(&mut id, self.input)?,
        }
        debug!(enumeration = E::NAME, errors = id.errors().len(), "validated decode");
        Ok(DecodeReport {
            valid: id.valid(),
            value: id.member().map(|member| member.id().to_string()),
            captured: id.captured_value().map(str::to_string),
            errors: id.errors().iter().map(ToString::to_string).collect(),
        })
    }
}
