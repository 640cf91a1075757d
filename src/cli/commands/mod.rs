//! CLI command implementations.

pub mod file;
pub mod init;
pub mod session;
