//! Advanced field settings stored alongside a field

use serde::{Deserialize, Serialize};

use super::FieldType;

/// Advanced settings for a field
///
/// Every attribute is optional on the wire; the editor fills in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl FieldMeta {
    /// Initial editor state: empty strings, zero limit, both flags off
    pub fn form_defaults() -> Self {
        Self {
            label: Some(String::new()),
            placeholder: Some(String::new()),
            format: Some(String::new()),
            character_limit: Some(0),
            required: Some(false),
            read_only: Some(false),
        }
    }

    /// Overlay the attributes present in `self` on top of `base`
    #[must_use]
    pub fn merged_over(self, base: FieldMeta) -> FieldMeta {
        FieldMeta {
            label: self.label.or(base.label),
            placeholder: self.placeholder.or(base.placeholder),
            format: self.format.or(base.format),
            character_limit: self.character_limit.or(base.character_limit),
            required: self.required.or(base.required),
            read_only: self.read_only.or(base.read_only),
        }
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only.unwrap_or(false)
    }
}

/// Storage key for a field's settings draft: `field_{form_id}_{TYPE}`
///
/// Fields sharing a form id but differing in type get separate drafts.
pub fn draft_key(form_id: &str, field_type: FieldType) -> String {
    format!("field_{form_id}_{field_type}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults() {
        let meta = FieldMeta::form_defaults();
        assert_eq!(meta.label.as_deref(), Some(""));
        assert_eq!(meta.character_limit, Some(0));
        assert!(!meta.is_required());
        assert!(!meta.is_read_only());
    }

    #[test]
    fn test_merge_keeps_base_for_missing_attributes() {
        let partial = FieldMeta {
            label: Some("Amount".to_string()),
            required: Some(true),
            ..Default::default()
        };

        let merged = partial.merged_over(FieldMeta::form_defaults());
        assert_eq!(merged.label.as_deref(), Some("Amount"));
        assert_eq!(merged.placeholder.as_deref(), Some(""));
        assert_eq!(merged.character_limit, Some(0));
        assert_eq!(merged.required, Some(true));
        assert_eq!(merged.read_only, Some(false));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let meta: FieldMeta = serde_json::from_str(r#"{"label":"Total","character_limit":8}"#).unwrap();
        assert_eq!(meta.label.as_deref(), Some("Total"));
        assert_eq!(meta.character_limit, Some(8));
        assert!(meta.format.is_none());
    }

    #[test]
    fn test_draft_key_includes_form_and_type() {
        assert_eq!(draft_key("abc", FieldType::Number), "field_abc_NUMBER");
        assert_ne!(
            draft_key("abc", FieldType::Number),
            draft_key("abc", FieldType::Text)
        );
    }
}
