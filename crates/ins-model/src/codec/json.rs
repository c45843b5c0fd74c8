//! Object notation (JSON) codec on raw value bytes.

use crate::error::{CodecError, WireFormat};
use crate::id::Id;
use crate::kind::Enumeration;
use crate::validated::ValidatedId;

/// The JSON null literal.
pub const NULL: &[u8] = b"null";

/// Encode a strict identifier.
///
/// # Errors
///
/// Returns [`CodecError::EncodeInvalid`] when the identifier holds a value
/// that is not a member.
pub fn marshal<E: Enumeration>(id: &Id<E>) -> Result<Vec<u8>, CodecError> {
    Ok(match id.encodable()? {
        Some(canonical) => quote(canonical),
        None => NULL.to_vec(),
    })
}

/// Encode a validated identifier. The captured value and errors are never
/// emitted; an unresolved identifier encodes as `null`.
pub fn marshal_validated<E: Enumeration>(id: &ValidatedId<E>) -> Vec<u8> {
    match id.member() {
        Some(member) => quote(member.id()),
        None => NULL.to_vec(),
    }
}

/// Decode a strict identifier from a JSON value.
///
/// `null` and `""` decode to the absent identifier.
///
/// # Errors
///
/// [`CodecError::DecodeMalformed`] when `raw` is not a JSON string or null,
/// [`CodecError::DecodeInvalid`] when the string is not a member.
pub fn unmarshal<E: Enumeration>(raw: &[u8]) -> Result<Id<E>, CodecError> {
    let value: Option<String> =
        serde_json::from_slice(raw).map_err(|error| CodecError::DecodeMalformed {
            enumeration: E::NAME,
            format: WireFormat::Json,
            message: error.to_string(),
        })?;
    match value {
        Some(value) => Id::parse(&value),
        None => Ok(Id::none()),
    }
}

/// Decode a JSON value into a validated identifier. Never fails.
///
/// Every `"` byte is removed from the input before it is captured; escape
/// sequences are not interpreted and survive into the captured value as
/// raw text. Whitespace around the value is ignored, as in [`unmarshal`].
/// The JSON `null` literal resets the identifier to absent without
/// recording an error.
pub fn unmarshal_validated<E: Enumeration>(target: &mut ValidatedId<E>, raw: &[u8]) {
    let text = String::from_utf8_lossy(raw);
    let value = text.trim_matches(is_json_whitespace);
    if value.as_bytes() == NULL {
        target.clear();
        return;
    }
    target.capture(&value.replace('"', ""));
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Canonical IDs contain nothing that needs escaping; tables enforce this.
fn quote(canonical: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(canonical.len() + 2);
    out.push(b'"');
    out.extend_from_slice(canonical.as_bytes());
    out.push(b'"');
    out
}
