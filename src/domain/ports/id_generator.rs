//! Identifier generation port.

/// Source of fresh entity identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
