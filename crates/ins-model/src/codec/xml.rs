//! Element notation (XML) codec.
//!
//! Identifiers are written as the text content of a single element. The
//! absent identifier is an element with empty content.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;

use crate::error::{CodecError, WireFormat};
use crate::id::Id;
use crate::kind::Enumeration;
use crate::validated::ValidatedId;

/// Text content of an arbitrary element.
#[derive(Debug, Deserialize)]
struct ElementText {
    #[serde(rename = "$text", default)]
    text: String,
}

/// Write a strict identifier as `<tag>canonical</tag>`.
///
/// # Errors
///
/// [`CodecError::EncodeInvalid`] when the identifier holds a non-member.
pub fn write_element<W: Write, E: Enumeration>(
    writer: &mut Writer<W>,
    tag: &str,
    id: &Id<E>,
) -> Result<(), CodecError> {
    let text = id.encodable()?.unwrap_or_default();
    write_text::<W, E>(writer, tag, text)
}

/// Write a validated identifier; unresolved identifiers write empty content.
///
/// # Errors
///
/// Only when the underlying writer fails.
pub fn write_validated_element<W: Write, E: Enumeration>(
    writer: &mut Writer<W>,
    tag: &str,
    id: &ValidatedId<E>,
) -> Result<(), CodecError> {
    let text = id.member().map(|member| member.id()).unwrap_or_default();
    write_text::<W, E>(writer, tag, text)
}

/// Encode a strict identifier as a standalone element string.
///
/// # Errors
///
/// See [`write_element`].
pub fn to_element<E: Enumeration>(tag: &str, id: &Id<E>) -> Result<String, CodecError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, tag, id)?;
    into_string::<E>(writer.into_inner())
}

/// Encode a validated identifier as a standalone element string.
///
/// # Errors
///
/// See [`write_validated_element`].
pub fn validated_to_element<E: Enumeration>(
    tag: &str,
    id: &ValidatedId<E>,
) -> Result<String, CodecError> {
    let mut writer = Writer::new(Vec::new());
    write_validated_element(&mut writer, tag, id)?;
    into_string::<E>(writer.into_inner())
}

/// Decode a strict identifier from an element's text content.
///
/// # Errors
///
/// [`CodecError::DecodeMalformed`] for malformed XML,
/// [`CodecError::DecodeInvalid`] when the text is not a member.
pub fn from_element<E: Enumeration>(xml: &str) -> Result<Id<E>, CodecError> {
    Id::parse(&element_text::<E>(xml)?)
}

/// Decode an element's text content into a validated identifier.
///
/// The whole text content becomes the captured value. Unresolved text is
/// recorded in the accumulator, not returned.
///
/// # Errors
///
/// [`CodecError::DecodeMalformed`] when the XML itself cannot be read; the
/// target is left untouched in that case.
pub fn from_element_validated<E: Enumeration>(
    target: &mut ValidatedId<E>,
    xml: &str,
) -> Result<(), CodecError> {
    let text = element_text::<E>(xml)?;
    target.capture(&text);
    Ok(())
}

fn element_text<E: Enumeration>(xml: &str) -> Result<String, CodecError> {
    quick_xml::de::from_str::<ElementText>(xml)
        .map(|element| element.text)
        .map_err(|error| CodecError::DecodeMalformed {
            enumeration: E::NAME,
            format: WireFormat::Xml,
            message: error.to_string(),
        })
}

fn write_text<W: Write, E: Enumeration>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), CodecError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(|error| encode_failed::<E>(&error))?;
    if !text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|error| encode_failed::<E>(&error))?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(|error| encode_failed::<E>(&error))?;
    Ok(())
}

fn into_string<E: Enumeration>(bytes: Vec<u8>) -> Result<String, CodecError> {
    String::from_utf8(bytes).map_err(|error| encode_failed::<E>(&error))
}

fn encode_failed<E: Enumeration>(error: &dyn std::fmt::Display) -> CodecError {
    CodecError::EncodeFailed {
        enumeration: E::NAME,
        format: WireFormat::Xml,
        message: error.to_string(),
    }
}
