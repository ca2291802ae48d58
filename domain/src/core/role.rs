//! Role value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The interview role a session practices for (Value Object)
///
/// Always stored trimmed and never empty, e.g. "Software Engineer" or a free
/// text description such as "Civil Engineer for a bridge project".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role {
    name: String,
}

impl Role {
    /// Try to create a role, returning None if it trims to empty
    pub fn try_new(name: impl AsRef<str>) -> Option<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                name: trimmed.to_string(),
            })
        }
    }

    /// Get the role name
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::try_new(value).ok_or(DomainError::EmptyRole)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.name
    }
}
