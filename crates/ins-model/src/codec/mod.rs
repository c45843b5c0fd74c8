//! Wire codecs for [`Id`](crate::Id) and [`ValidatedId`](crate::ValidatedId).
//!
//! Two formats are supported and both identifier kinds emit the same bytes
//! for a given resolved ID:
//!
//! | | absent | resolved |
//! |---|---|---|
//! | [`json`] | `null` | `"<canonical>"` |
//! | [`xml`] | `<tag></tag>` | `<tag><canonical></tag>` |
//!
//! Strict identifiers fail to encode when they hold a non-member and fail
//! to decode non-empty non-members. Validated identifiers never fail to
//! decode; they capture the input and record errors instead.
//!
//! The `serde` implementations follow the same rules and are what enclosing
//! documents use. The JSON raw-bytes functions in [`json`] keep the literal
//! quote handling of the validated decoder; see
//! [`json::unmarshal_validated`].

mod impls;
pub mod json;
pub mod xml;
