//! Field diffing
//!
//! Compares the stored field before and after an update and reports each
//! attribute whose value changed, in a fixed order.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::entities::Field;

/// Field attribute that can appear in an audit diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldAttribute {
    RecipientId,
    Type,
    Page,
    PositionX,
    PositionY,
    Width,
    Height,
    FieldMeta,
}

/// One changed attribute with its old and new value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub attribute: FieldAttribute,
    pub from: JsonValue,
    pub to: JsonValue,
}

fn push_if_changed(
    changes: &mut Vec<FieldChange>,
    attribute: FieldAttribute,
    from: JsonValue,
    to: JsonValue,
) {
    if from != to {
        changes.push(FieldChange {
            attribute,
            from,
            to,
        });
    }
}

/// Diff two states of the same field
pub fn diff_field_changes(before: &Field, after: &Field) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    push_if_changed(
        &mut changes,
        FieldAttribute::RecipientId,
        json!(before.recipient_id),
        json!(after.recipient_id),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::Type,
        json!(before.field_type),
        json!(after.field_type),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::Page,
        json!(before.page),
        json!(after.page),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::PositionX,
        json!(before.position_x),
        json!(after.position_x),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::PositionY,
        json!(before.position_y),
        json!(after.position_y),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::Width,
        json!(before.width),
        json!(after.width),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::Height,
        json!(before.height),
        json!(after.height),
    );
    push_if_changed(
        &mut changes,
        FieldAttribute::FieldMeta,
        json!(before.field_meta),
        json!(after.field_meta),
    );

    changes
}
