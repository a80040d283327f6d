//! Structural diffing of field state for audit entries

mod diff;

pub use diff::{diff_field_changes, FieldAttribute, FieldChange};
