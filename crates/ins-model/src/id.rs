//! Strict identifiers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::CodecError;
use crate::kind::{AlternativeKeyed, Enumeration, Hierarchical};
use crate::member::Member;
use crate::validated::ValidatedId;

/// Anything that may yield a canonical ID string.
pub trait AsIdStr {
    fn as_id_str(&self) -> Option<&str>;
}

impl AsIdStr for str {
    fn as_id_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsIdStr for String {
    fn as_id_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: AsIdStr + ?Sized> AsIdStr for &T {
    fn as_id_str(&self) -> Option<&str> {
        (**self).as_id_str()
    }
}

impl<T: AsIdStr> AsIdStr for Option<T> {
    fn as_id_str(&self) -> Option<&str> {
        self.as_ref().and_then(AsIdStr::as_id_str)
    }
}

impl<E> AsIdStr for Id<E> {
    fn as_id_str(&self) -> Option<&str> {
        self.as_str()
    }
}

/// A typed identifier that rejects unknown values on decode.
///
/// The held string is not checked on construction: [`Id::new`] may wrap a
/// value that is not a member, which then reports `valid() == false` and
/// fails to encode. Use [`Id::parse`] to resolve input to its canonical
/// spelling.
pub struct Id<E> {
    value: Option<String>,
    kind: PhantomData<fn() -> E>,
}

impl<E> Id<E> {
    /// The absent identifier.
    pub const fn none() -> Self {
        Self {
            value: None,
            kind: PhantomData,
        }
    }

    /// Wrap a raw value without resolving it. Empty input is absent.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            value: (!value.is_empty()).then_some(value),
            kind: PhantomData,
        }
    }

    /// The held string, valid or not.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }
}

impl<E: Enumeration> Id<E> {
    /// Resolve input to the canonical spelling.
    ///
    /// Empty input yields the absent identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DecodeInvalid`] when non-empty input is not a
    /// member.
    pub fn parse(input: &str) -> Result<Self, CodecError> {
        if input.is_empty() {
            return Ok(Self::none());
        }
        E::table()
            .and_then(|table| table.by_id_string(input))
            .map(|member| Self::new(member.id()))
            .ok_or_else(|| CodecError::DecodeInvalid {
                enumeration: E::NAME,
                value: input.to_string(),
            })
    }

    /// Identifier of the member whose programmatic name is `name`.
    pub fn named(name: &str) -> Self {
        E::table()
            .and_then(|table| table.by_name(name))
            .map_or_else(Self::none, |member| Self::new(member.id()))
    }

    /// The member record this identifier resolves to.
    pub fn member(&self) -> Option<&'static Member> {
        E::table()?.by_id_string(self.value.as_deref()?)
    }

    pub fn valid(&self) -> bool {
        self.member().is_some()
    }

    /// `self` when valid, otherwise absent.
    pub fn id(&self) -> Self {
        if self.valid() {
            self.clone()
        } else {
            Self::none()
        }
    }

    /// Canonical ID when valid, otherwise the empty string.
    pub fn to_id_string(&self) -> String {
        self.member()
            .map(|member| member.id().to_string())
            .unwrap_or_default()
    }

    pub fn validated_id(&self) -> ValidatedId<E> {
        ValidatedId::new(self.id())
    }

    /// Follow a reference field to the linked member.
    pub fn join(&self, key: &str) -> Option<&'static Member> {
        E::catalog()?.join(self.member()?, key)
    }

    /// Follow a reference field into a typed identifier of the target kind.
    ///
    /// Absent when the field is not a link into `F`'s table.
    pub fn join_id<F: Enumeration>(&self, key: &str) -> Id<F> {
        let catalog = E::catalog();
        let linked = self.member().and_then(|member| {
            let link = member.link(key)?;
            let table = catalog?.link_table(link)?;
            if !table.name().eq_ignore_ascii_case(F::NAME) {
                return None;
            }
            table.by_index(link.member)
        });
        linked.map_or_else(Id::none, |member| Id::new(member.id()))
    }

    /// Canonical ID to emit, `None` for the absent identifier.
    pub(crate) fn encodable(&self) -> Result<Option<&'static str>, CodecError> {
        let Some(value) = self.value.as_deref() else {
            return Ok(None);
        };
        self.member()
            .map(|member| Some(member.id()))
            .ok_or_else(|| CodecError::EncodeInvalid {
                enumeration: E::NAME,
                value: value.to_string(),
            })
    }
}

impl<E: Hierarchical> Id<E> {
    /// The parent's ID, or the member's own ID for roots.
    ///
    /// Absent when the identifier does not resolve.
    pub fn parent(&self) -> Self {
        let Some(member) = self.member() else {
            return Self::none();
        };
        let parent = E::table().and_then(|table| table.parent_of(member));
        Self::new(parent.unwrap_or(member).id())
    }
}

impl<E: AlternativeKeyed> Id<E> {
    /// Resolve an alternative key (or canonical ID) to an identifier.
    pub fn from_alternative_key(key: &str) -> Self {
        E::table()
            .and_then(|table| table.by_alternative_key(key))
            .map_or_else(Self::none, |member| Self::new(member.id()))
    }
}

impl<E> Clone for Id<E> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            kind: PhantomData,
        }
    }
}

impl<E> Default for Id<E> {
    fn default() -> Self {
        Self::none()
    }
}

/// Byte equality of the held strings; two absent identifiers are equal.
impl<E> PartialEq for Id<E> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<E> Eq for Id<E> {}

impl<E> Hash for Id<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<E: Enumeration> fmt::Debug for Id<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id<{}>({:?})", E::NAME, self.value)
    }
}

impl<E: Enumeration> fmt::Display for Id<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id_string())
    }
}

impl<E: Enumeration> FromStr for Id<E> {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
