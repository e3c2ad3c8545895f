//! User entity and the closed set of roles.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Role of a user within the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Organizer: manages activities, payments and broadcasts
    Admin,
    /// Regular trip participant
    Participant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Participant => "PARTICIPANT",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the stored representation. Anything but the two known values
/// fails closed.
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "PARTICIPANT" => Ok(Role::Participant),
            other => Err(DomainError::DataIntegrity {
                message: format!("unknown role '{}'", other),
            }),
        }
    }
}

/// Registered user
///
/// Deliberately not `Serialize`: the password digest must never end up in a
/// response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// bcrypt digest
    pub password_hash: String,
    pub role: Role,
    pub has_paid: bool,
    pub registered_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the given role who has not paid yet
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            has_paid: false,
            registered_at: Utc::now(),
        }
    }

    /// Creates a self-registered participant
    pub fn new_participant(name: String, email: String, password_hash: String) -> Self {
        Self::new(name, email, password_hash, Role::Participant)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }

    pub fn contact(&self) -> UserContact {
        UserContact {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Name tag shown next to an activity's creator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
}

/// Recipient details shown in the organizer's notification overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant() {
        let user = User::new_participant(
            "Felix".to_string(),
            "felix@example.com".to_string(),
            "$2b$04$digest".to_string(),
        );

        assert_eq!(user.role, Role::Participant);
        assert!(!user.has_paid);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_parsing_fails_closed() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("PARTICIPANT".parse::<Role>().unwrap(), Role::Participant);

        let err = "admin".parse::<Role>().unwrap_err();
        assert!(matches!(err, DomainError::DataIntegrity { .. }));
        assert!("SUPERUSER".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"PARTICIPANT\"").unwrap(),
            Role::Participant
        );
    }
}
