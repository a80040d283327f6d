//! Path parameter extractors
//!
//! Type-safe extraction of record ids and draft coordinates from the path.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};
use sign_core::entities::FieldType;
use sign_core::value_objects::{DocumentId, FieldId};

use crate::response::ApiError;

/// Longest form id accepted in a draft path
const MAX_FORM_ID_LEN: usize = 128;

/// Extract path parameters, rejecting with [`ApiError::InvalidPath`]
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// Path parameters with document_id
#[derive(Debug, Deserialize)]
pub struct DocumentPath {
    pub document_id: String,
}

impl DocumentPath {
    /// Parse document_id
    pub fn document_id(&self) -> Result<DocumentId, ApiError> {
        self.document_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid document_id format"))
    }
}

/// Path parameters with document_id and field_id
#[derive(Debug, Deserialize)]
pub struct FieldPath {
    pub document_id: String,
    pub field_id: String,
}

impl FieldPath {
    /// Parse document_id
    pub fn document_id(&self) -> Result<DocumentId, ApiError> {
        self.document_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid document_id format"))
    }

    /// Parse field_id
    pub fn field_id(&self) -> Result<FieldId, ApiError> {
        self.field_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid field_id format"))
    }
}

/// Path parameters addressing one settings draft
#[derive(Debug, Deserialize)]
pub struct DraftPath {
    pub form_id: String,
    pub field_type: String,
}

impl DraftPath {
    /// The client-side form id, trimmed
    pub fn form_id(&self) -> Result<&str, ApiError> {
        let form_id = self.form_id.trim();
        if form_id.is_empty() || form_id.len() > MAX_FORM_ID_LEN {
            return Err(ApiError::invalid_path(format!(
                "form_id must be 1-{MAX_FORM_ID_LEN} characters"
            )));
        }
        Ok(form_id)
    }

    /// Parse field_type, case-insensitively
    pub fn field_type(&self) -> Result<FieldType, ApiError> {
        self.field_type
            .parse()
            .map_err(|_| ApiError::invalid_path(format!("Unknown field type '{}'", self.field_type)))
    }
}
