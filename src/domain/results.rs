//! Tagged results for lookups that may miss their target.

/// Result of an operation addressed at a single entity.
///
/// A missing entity is an expected outcome, so it is a variant rather than an
/// error. Storage failures still travel through [`DomainResult`](crate::domain::errors::DomainResult).
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The entity existed and the operation was applied.
    Success(T),
    /// No entity exists for the given identifier.
    NotFound,
}

impl<T> Outcome<T> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Convert into an `Option`, discarding the miss marker.
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::NotFound => Outcome::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Success)
    }
}
