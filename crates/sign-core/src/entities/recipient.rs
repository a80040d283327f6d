//! Recipient entity - a party asked to view, approve or sign a document

use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{DocumentId, RecipientId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientRole {
    Signer,
    Viewer,
    Approver,
    Cc,
}

impl RecipientRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Signer => "SIGNER",
            Self::Viewer => "VIEWER",
            Self::Approver => "APPROVER",
            Self::Cc => "CC",
        }
    }
}

impl FromStr for RecipientRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SIGNER" => Ok(Self::Signer),
            "VIEWER" => Ok(Self::Viewer),
            "APPROVER" => Ok(Self::Approver),
            "CC" => Ok(Self::Cc),
            other => Err(DomainError::InternalError(format!(
                "unknown recipient role: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningStatus {
    NotSigned,
    Signed,
}

impl SigningStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotSigned => "NOT_SIGNED",
            Self::Signed => "SIGNED",
        }
    }
}

impl FromStr for SigningStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_SIGNED" => Ok(Self::NotSigned),
            "SIGNED" => Ok(Self::Signed),
            other => Err(DomainError::InternalError(format!(
                "unknown signing status: {other}"
            ))),
        }
    }
}

/// Recipient entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub id: RecipientId,
    pub document_id: DocumentId,
    pub email: String,
    pub name: String,
    pub role: RecipientRole,
    pub signing_status: SigningStatus,
}

impl Recipient {
    #[inline]
    pub fn has_signed(&self) -> bool {
        self.signing_status == SigningStatus::Signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_and_status_parsing() {
        assert_eq!("CC".parse::<RecipientRole>().unwrap(), RecipientRole::Cc);
        assert_eq!("SIGNED".parse::<SigningStatus>().unwrap(), SigningStatus::Signed);
        assert!("OWNER".parse::<RecipientRole>().is_err());
    }
}
