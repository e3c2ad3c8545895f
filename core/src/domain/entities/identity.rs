//! Identity asserted by a verified token.

use uuid::Uuid;

use super::user::{Role, User};

/// Claims decoded from a valid bearer token
///
/// Lives for a single request. The role is taken as issued and is not
/// re-checked against storage until the token expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl IdentityClaims {
    pub fn new(user_id: Uuid, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for IdentityClaims {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}
