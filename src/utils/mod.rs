//! Small shared helpers with no domain knowledge.

pub mod labels;
pub mod short_id;
pub mod text;

pub use labels::{LabelTable, Labeled};
pub use short_id::{generate_short_key, ShortIdGenerator, DEFAULT_ID_LENGTH};
pub use text::TextExt;
