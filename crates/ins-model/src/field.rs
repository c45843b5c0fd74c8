//! Typed accessors over member metadata.
//!
//! Metadata is stored once, as the string map on [`Member`]. A [`Field`]
//! names a key and a value type and parses the map entry on demand, so the
//! typed view and the map cannot disagree.

use std::marker::PhantomData;

use crate::member::Member;

/// Value type of a typed metadata field.
pub trait FieldType {
    /// Label used in error messages.
    const LABEL: &'static str;

    type Value<'a>;

    fn parse(raw: &str) -> Option<Self::Value<'_>>;

    /// Canonical string form of a parsed value.
    fn render(value: &Self::Value<'_>) -> String;
}

/// Free text.
#[derive(Debug, Clone, Copy)]
pub enum Text {}

/// Comma-separated list.
#[derive(Debug, Clone, Copy)]
pub enum List {}

/// Signed integer.
#[derive(Debug, Clone, Copy)]
pub enum Integer {}

/// Boolean flag.
#[derive(Debug, Clone, Copy)]
pub enum Flag {}

impl FieldType for Text {
    const LABEL: &'static str = "text";
    type Value<'a> = &'a str;

    fn parse(raw: &str) -> Option<&str> {
        Some(raw)
    }

    fn render(value: &&str) -> String {
        (*value).to_string()
    }
}

impl FieldType for List {
    const LABEL: &'static str = "list";
    type Value<'a> = Vec<&'a str>;

    fn parse(raw: &str) -> Option<Vec<&str>> {
        Some(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    fn render(value: &Vec<&str>) -> String {
        value.join(",")
    }
}

impl FieldType for Integer {
    const LABEL: &'static str = "integer";
    type Value<'a> = i64;

    fn parse(raw: &str) -> Option<i64> {
        raw.trim().parse().ok()
    }

    fn render(value: &i64) -> String {
        value.to_string()
    }
}

impl FieldType for Flag {
    const LABEL: &'static str = "flag";
    type Value<'a> = bool;

    fn parse(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        }
    }

    fn render(value: &bool) -> String {
        value.to_string()
    }
}

/// A metadata key paired with its value type.
///
/// ```
/// use ins_model::{Field, Integer};
///
/// const MONTHS: Field<Integer> = Field::new("Months");
/// assert_eq!(MONTHS.key(), "Months");
/// ```
pub struct Field<T> {
    key: &'static str,
    kind: PhantomData<fn() -> T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Field").field(&self.key).finish()
    }
}

impl<T: FieldType> Field<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            kind: PhantomData,
        }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Read and parse the field from a member's metadata.
    pub fn get<'a>(&self, member: &'a Member) -> Option<T::Value<'a>> {
        member.meta(self.key).and_then(T::parse)
    }

    /// Whether the typed value renders back to the stored metadata string.
    pub fn agrees(&self, member: &Member) -> bool {
        match (member.meta(self.key), self.get(member)) {
            (Some(raw), Some(value)) => T::render(&value) == raw,
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_splits_and_trims() {
        assert_eq!(List::parse("VA, MD ,,DC"), Some(vec!["VA", "MD", "DC"]));
        assert_eq!(List::parse(""), Some(vec![]));
    }

    #[test]
    fn flag_accepts_yes_no() {
        assert_eq!(Flag::parse("Yes"), Some(true));
        assert_eq!(Flag::parse("false"), Some(false));
        assert_eq!(Flag::parse("maybe"), None);
    }

    #[test]
    fn integer_rejects_text() {
        assert_eq!(Integer::parse(" 12 "), Some(12));
        assert_eq!(Integer::parse("twelve"), None);
    }
}
