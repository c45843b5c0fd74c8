//! CLI library components for the enumeration catalog tool.

pub mod commands;
pub mod logging;
pub mod summary;
