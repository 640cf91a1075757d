//! Infrastructure adapters for external systems.

pub mod filesystem;
pub mod sqlite;
