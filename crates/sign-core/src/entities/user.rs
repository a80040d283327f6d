//! User and team entities

use crate::value_objects::{TeamId, UserId};

/// User account, as far as the field workflow needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: String,
}

impl User {
    /// Name shown in audit history, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Team that can own documents on behalf of its members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub url: String,
}
