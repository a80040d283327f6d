//! Field entity - a typed, positioned annotation on a document page

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entities::{FieldMeta, Recipient};
use crate::error::DomainError;
use crate::value_objects::{DocumentId, FieldId, RecipientId};

/// Kind of input a recipient provides for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Signature,
    FreeSignature,
    Initials,
    Name,
    Email,
    Date,
    Text,
    Number,
    Radio,
    Checkbox,
    Dropdown,
}

impl FieldType {
    /// Database / wire representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Signature => "SIGNATURE",
            Self::FreeSignature => "FREE_SIGNATURE",
            Self::Initials => "INITIALS",
            Self::Name => "NAME",
            Self::Email => "EMAIL",
            Self::Date => "DATE",
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Radio => "RADIO",
            Self::Checkbox => "CHECKBOX",
            Self::Dropdown => "DROPDOWN",
        }
    }

    /// Numeric fields expose format, character limit and required/read-only settings
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SIGNATURE" => Ok(Self::Signature),
            "FREE_SIGNATURE" => Ok(Self::FreeSignature),
            "INITIALS" => Ok(Self::Initials),
            "NAME" => Ok(Self::Name),
            "EMAIL" => Ok(Self::Email),
            "DATE" => Ok(Self::Date),
            "TEXT" => Ok(Self::Text),
            "NUMBER" => Ok(Self::Number),
            "RADIO" => Ok(Self::Radio),
            "CHECKBOX" => Ok(Self::Checkbox),
            "DROPDOWN" => Ok(Self::Dropdown),
            other => Err(DomainError::InvalidFieldType(other.to_string())),
        }
    }
}

/// Field entity
///
/// Position and size are percentages of the page (0-100), matching how the
/// editor places fields independently of the rendered PDF resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: FieldId,
    /// Public identifier referenced by audit entries
    pub secondary_id: String,
    pub document_id: DocumentId,
    pub recipient_id: Option<RecipientId>,
    pub field_type: FieldType,
    /// 1-based page number
    pub page: i32,
    pub position_x: f64,
    pub position_y: f64,
    pub width: f64,
    pub height: f64,
    pub custom_text: String,
    /// Set once the recipient has filled or signed the field
    pub inserted: bool,
    pub field_meta: Option<FieldMeta>,
}

impl Field {
    /// Check if the recipient has already completed this field
    #[inline]
    pub fn is_signed(&self) -> bool {
        self.inserted
    }

    /// Check if the field is assigned to the given recipient
    #[inline]
    pub fn is_assigned_to(&self, recipient_id: RecipientId) -> bool {
        self.recipient_id == Some(recipient_id)
    }
}

/// Field together with its resolved recipient
#[derive(Debug, Clone, PartialEq)]
pub struct FieldWithRecipient {
    pub field: Field,
    pub recipient: Option<Recipient>,
}

impl FieldWithRecipient {
    /// Recipient email, or an empty string when the field is unassigned
    pub fn recipient_email(&self) -> &str {
        self.recipient.as_ref().map_or("", |r| r.email.as_str())
    }
}

/// Partial update for a field
///
/// `None` leaves the stored attribute untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub recipient_id: Option<RecipientId>,
    pub field_type: Option<FieldType>,
    pub page: Option<i32>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub field_meta: Option<FieldMeta>,
}

impl FieldPatch {
    /// Check if the patch carries no changes at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject geometry no editor could produce
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(page) = self.page {
            if page < 1 {
                return Err(DomainError::ValidationError(
                    "page number must be at least 1".to_string(),
                ));
            }
        }

        for (name, value) in [("position_x", self.position_x), ("position_y", self.position_y)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(DomainError::ValidationError(format!(
                        "{name} must be a finite, non-negative number"
                    )));
                }
            }
        }

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(DomainError::ValidationError(format!(
                        "{name} must be a finite, positive number"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Produce the field as it will look after this patch
    pub fn apply_to(&self, field: &Field) -> Field {
        let mut next = field.clone();
        if let Some(recipient_id) = self.recipient_id {
            next.recipient_id = Some(recipient_id);
        }
        if let Some(field_type) = self.field_type {
            next.field_type = field_type;
        }
        if let Some(page) = self.page {
            next.page = page;
        }
        if let Some(x) = self.position_x {
            next.position_x = x;
        }
        if let Some(y) = self.position_y {
            next.position_y = y;
        }
        if let Some(width) = self.width {
            next.width = width;
        }
        if let Some(height) = self.height {
            next.height = height;
        }
        if let Some(meta) = &self.field_meta {
            next.field_meta = Some(meta.clone());
        }
        next
    }
}
