//! `serde` implementations for identifiers.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CodecError, WireFormat};
use crate::id::Id;
use crate::kind::Enumeration;
use crate::validated::ValidatedId;

impl<E: Enumeration> Serialize for Id<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let canonical = self
            .encodable()
            .map_err(<S::Error as ser::Error>::custom)?;
        match canonical {
            Some(canonical) => serializer.serialize_str(canonical),
            None => serializer.serialize_none(),
        }
    }
}

impl<E: Enumeration> Serialize for ValidatedId<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.member() {
            Some(member) => serializer.serialize_str(member.id()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, E: Enumeration> Deserialize<'de> for Id<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(StrictVisitor(PhantomData))
    }
}

/// Resolves strings strictly; `null` and `""` are absent.
struct StrictVisitor<E>(PhantomData<fn() -> E>);

impl<'de, E: Enumeration> Visitor<'de> for StrictVisitor<E> {
    type Value = Id<E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} identifier string or null", E::NAME)
    }

    fn visit_none<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Id::none())
    }

    fn visit_unit<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(Id::none())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<Er: de::Error>(self, value: &str) -> Result<Self::Value, Er> {
        Id::parse(value).map_err(Er::custom)
    }
}

impl<'de, E: Enumeration> Deserialize<'de> for ValidatedId<E> {
    /// Accepts any value shape. Strings go through
    /// [`ValidatedId::capture`]; scalars are captured in their text form;
    /// sequences and maps are skipped and recorded as malformed.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TolerantVisitor(PhantomData))
    }
}

struct TolerantVisitor<E>(PhantomData<fn() -> E>);

impl<E: Enumeration> TolerantVisitor<E> {
    fn captured(raw: &str) -> ValidatedId<E> {
        ValidatedId::decode(raw)
    }

    fn malformed(shape: &str) -> ValidatedId<E> {
        let mut id = ValidatedId::none();
        id.record(CodecError::DecodeMalformed {
            enumeration: E::NAME,
            format: WireFormat::Json,
            message: format!("expected a string, found {shape}"),
        });
        id
    }
}

impl<'de, E: Enumeration> Visitor<'de> for TolerantVisitor<E> {
    type Value = ValidatedId<E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "any value for a {} identifier", E::NAME)
    }

    fn visit_none<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(ValidatedId::none())
    }

    fn visit_unit<Er: de::Error>(self) -> Result<Self::Value, Er> {
        Ok(ValidatedId::none())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<Er: de::Error>(self, value: &str) -> Result<Self::Value, Er> {
        Ok(Self::captured(value))
    }

    fn visit_bytes<Er: de::Error>(self, value: &[u8]) -> Result<Self::Value, Er> {
        Ok(Self::captured(&String::from_utf8_lossy(value)))
    }

    fn visit_bool<Er: de::Error>(self, value: bool) -> Result<Self::Value, Er> {
        Ok(Self::captured(&value.to_string()))
    }

    fn visit_i64<Er: de::Error>(self, value: i64) -> Result<Self::Value, Er> {
        Ok(Self::captured(&value.to_string()))
    }

    fn visit_u64<Er: de::Error>(self, value: u64) -> Result<Self::Value, Er> {
        Ok(Self::captured(&value.to_string()))
    }

    fn visit_f64<Er: de::Error>(self, value: f64) -> Result<Self::Value, Er> {
        Ok(Self::captured(&value.to_string()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Self::malformed("a sequence"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Self::malformed("a map"))
    }
}
