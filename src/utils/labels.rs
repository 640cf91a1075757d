//! Cached string labels for enums.
//!
//! Each labeled enum declares its `(variant, label)` pairs once; the pairs are
//! turned into a bidirectional [`LabelTable`] on first use and kept for the
//! life of the process. Reverse lookups ignore case.

use std::collections::HashMap;
use std::hash::Hash;

use crate::utils::text::TextExt;

/// Bidirectional mapping between enum values and their labels.
#[derive(Debug)]
pub struct LabelTable<T> {
    to_label: HashMap<T, &'static str>,
    from_label: HashMap<String, T>,
    labels: Vec<&'static str>,
}

impl<T: Copy + Eq + Hash> LabelTable<T> {
    /// Build a table from declared pairs.
    ///
    /// Blank labels are skipped. When two labels collide ignoring case, the
    /// first one declared wins the reverse lookup.
    pub fn new(entries: &[(T, &'static str)]) -> Self {
        let mut to_label = HashMap::with_capacity(entries.len());
        let mut from_label = HashMap::with_capacity(entries.len());
        let mut labels = Vec::with_capacity(entries.len());

        for &(value, label) in entries {
            if !label.has_value() {
                continue;
            }
            to_label.insert(value, label);
            from_label.entry(label.to_lowercase()).or_insert(value);
            labels.push(label);
        }

        Self {
            to_label,
            from_label,
            labels,
        }
    }

    pub fn label(&self, value: T) -> Option<&'static str> {
        self.to_label.get(&value).copied()
    }

    pub fn lookup(&self, label: &str) -> Option<T> {
        self.from_label.get(&label.to_lowercase()).copied()
    }

    /// Look up `label`, falling back to `default` when it is missing or unknown.
    pub fn lookup_or(&self, label: Option<&str>, default: T) -> T {
        label.and_then(|l| self.lookup(l)).unwrap_or(default)
    }

    /// All labels in declaration order.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }
}

/// Enum with a process-wide cached [`LabelTable`].
///
/// Implement through [`labeled_enum!`](crate::utils::labels::labeled_enum).
pub trait Labeled: Copy + Eq + Hash + Send + Sync + 'static {
    fn label_table() -> &'static LabelTable<Self>;

    fn label(self) -> &'static str {
        Self::label_table().label(self).unwrap_or_default()
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::label_table().lookup(label)
    }

    fn labels() -> &'static [&'static str] {
        Self::label_table().labels()
    }
}

/// Implement [`Labeled`] for an enum from a list of `Variant => "label"` pairs.
macro_rules! labeled_enum {
    ($ty:ty { $($variant:path => $label:expr),+ $(,)? }) => {
        impl $crate::utils::labels::Labeled for $ty {
            fn label_table() -> &'static $crate::utils::labels::LabelTable<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::utils::labels::LabelTable<$ty>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    $crate::utils::labels::LabelTable::new(&[$(($variant, $label)),+])
                })
            }
        }
    };
}

pub(crate) use labeled_enum;
