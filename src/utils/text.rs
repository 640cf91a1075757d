//! String helpers.

/// Extension methods for string slices.
pub trait TextExt {
    /// True when the string contains something other than whitespace.
    fn has_value(&self) -> bool;

    /// Case-insensitive substring test.
    fn contains_ignore_case(&self, needle: &str) -> bool;
}

impl TextExt for str {
    fn has_value(&self) -> bool {
        !self.trim().is_empty()
    }

    fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_lowercase().contains(&needle.to_lowercase())
    }
}
