//! Embedded catalog data.
//!
//! Both schema files are embedded at compile time using `include_str!()`,
//! so the default catalog needs no file I/O.

/// File name of the enumeration declarations.
pub const ENUMERATIONS_FILE: &str = "Enumerations.csv";

/// File name of the member rows.
pub const MEMBERS_FILE: &str = "Members.csv";

/// Enumerations.csv: one row per enumeration.
pub const ENUMERATIONS: &str = include_str!("../data/catalog/Enumerations.csv");

/// Members.csv: one row per member, in declaration order.
pub const MEMBERS: &str = include_str!("../data/catalog/Members.csv");
