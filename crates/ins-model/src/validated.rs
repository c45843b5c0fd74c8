//! Validated identifiers: decode never fails, problems are recorded.

use std::fmt;

use tracing::debug;

use crate::error::CodecError;
use crate::id::{AsIdStr, Id};
use crate::kind::{Enumeration, Hierarchical};
use crate::member::Member;

/// An identifier that tolerates untrusted input.
///
/// Decoding captures the raw text it saw and appends a [`CodecError`] to the
/// accumulator when the text does not resolve, leaving the resolved ID
/// absent. Equality compares the resolved IDs only.
///
/// A single value must not be decoded into from several threads at once;
/// decoding mutates the captured value and the error accumulator.
pub struct ValidatedId<E> {
    id: Id<E>,
    captured: Option<String>,
    errors: Vec<CodecError>,
}

impl<E> ValidatedId<E> {
    /// An absent identifier with nothing captured.
    pub const fn none() -> Self {
        Self {
            id: Id::none(),
            captured: None,
            errors: Vec::new(),
        }
    }

    /// Raw text seen by the last decode.
    pub fn captured_value(&self) -> Option<&str> {
        self.captured.as_deref()
    }

    /// Decode errors collected so far, oldest first.
    pub fn errors(&self) -> &[CodecError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The inner strict identifier, as stored.
    pub fn inner(&self) -> &Id<E> {
        &self.id
    }

    pub fn into_id(self) -> Id<E> {
        self.id
    }

    /// Reset to absent without recording anything.
    pub(crate) fn clear(&mut self) {
        self.id = Id::none();
        self.captured = None;
    }

    pub(crate) fn record(&mut self, error: CodecError) {
        self.errors.push(error);
    }
}

impl<E: Enumeration> ValidatedId<E> {
    pub fn new(id: Id<E>) -> Self {
        Self {
            id,
            captured: None,
            errors: Vec::new(),
        }
    }

    pub fn valid(&self) -> bool {
        self.id.valid()
    }

    /// The resolved identifier when valid, otherwise absent.
    pub fn id(&self) -> Id<E> {
        self.id.id()
    }

    pub fn to_id_string(&self) -> String {
        self.id.to_id_string()
    }

    /// A fresh validated identifier holding `self.id()`.
    pub fn validated_id(&self) -> Self {
        Self::new(self.id())
    }

    pub fn member(&self) -> Option<&'static Member> {
        self.id.member()
    }

    /// Decode `raw` into this identifier.
    ///
    /// Never fails: empty input leaves the identifier absent, unresolved
    /// input leaves it absent and appends [`CodecError::DecodeInvalid`].
    pub fn capture(&mut self, raw: &str) {
        self.captured = Some(raw.to_string());
        if raw.is_empty() {
            self.id = Id::none();
            return;
        }
        match Id::parse(raw) {
            Ok(id) => self.id = id,
            Err(error) => {
                debug!(enumeration = E::NAME, error = %error, "recorded decode error");
                self.id = Id::none();
                self.errors.push(error);
            }
        }
    }

    /// Build a validated identifier by decoding `raw`.
    pub fn decode(raw: &str) -> Self {
        let mut validated = Self::none();
        validated.capture(raw);
        validated
    }
}

impl<E: Hierarchical> ValidatedId<E> {
    /// See [`Id::parent`].
    pub fn parent(&self) -> Id<E> {
        self.id.parent()
    }
}

impl<E> Clone for ValidatedId<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            captured: self.captured.clone(),
            errors: self.errors.clone(),
        }
    }
}

impl<E> Default for ValidatedId<E> {
    fn default() -> Self {
        Self::none()
    }
}

impl<E> PartialEq for ValidatedId<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<E> Eq for ValidatedId<E> {}

impl<E: Enumeration> From<Id<E>> for ValidatedId<E> {
    fn from(id: Id<E>) -> Self {
        Self::new(id)
    }
}

impl<E> AsIdStr for ValidatedId<E> {
    fn as_id_str(&self) -> Option<&str> {
        self.id.as_str()
    }
}

impl<E: Enumeration> fmt::Debug for ValidatedId<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedId")
            .field("id", &self.id)
            .field("captured", &self.captured)
            .field("errors", &self.errors)
            .finish()
    }
}

/// The canonical ID when resolved, otherwise empty. Never the captured text.
impl<E: Enumeration> fmt::Display for ValidatedId<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id_string())
    }
}
