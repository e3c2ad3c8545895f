//! Role and ownership policies applied before a request reaches business logic.
//!
//! Both policies work purely on the claims attached by the authentication
//! gate and never consult storage.

use uuid::Uuid;

use crate::domain::entities::identity::IdentityClaims;
use crate::errors::AuthError;

pub const ADMIN_REQUIRED: &str = "Admin access required";
pub const ACCESS_DENIED: &str = "Access denied";

/// Admit only organizers
pub fn require_admin(claims: Option<&IdentityClaims>) -> Result<&IdentityClaims, AuthError> {
    let claims = claims.ok_or(AuthError::Unauthenticated)?;
    if claims.is_admin() {
        Ok(claims)
    } else {
        Err(AuthError::forbidden(ADMIN_REQUIRED))
    }
}

/// Admit the user the target id refers to, or any organizer.
///
/// A target that is not a UUID never matches.
pub fn require_ownership_or_admin<'a>(
    claims: Option<&'a IdentityClaims>,
    target_id: &str,
) -> Result<&'a IdentityClaims, AuthError> {
    let claims = claims.ok_or(AuthError::Unauthenticated)?;
    if claims.is_admin() {
        return Ok(claims);
    }

    match Uuid::parse_str(target_id) {
        Ok(target) if target == claims.user_id => Ok(claims),
        _ => Err(AuthError::forbidden(ACCESS_DENIED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::Role;

    fn claims(role: Role) -> IdentityClaims {
        IdentityClaims::new(Uuid::new_v4(), "someone@example.com", role)
    }

    #[test]
    fn test_require_admin() {
        let admin = claims(Role::Admin);
        let participant = claims(Role::Participant);

        assert!(require_admin(Some(&admin)).is_ok());
        assert_eq!(
            require_admin(Some(&participant)),
            Err(AuthError::forbidden(ADMIN_REQUIRED))
        );
        assert_eq!(require_admin(None), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn test_participant_may_access_own_resource_only() {
        let participant = claims(Role::Participant);
        let own = participant.user_id.to_string();
        let other = Uuid::new_v4().to_string();

        assert!(require_ownership_or_admin(Some(&participant), &own).is_ok());
        assert_eq!(
            require_ownership_or_admin(Some(&participant), &other),
            Err(AuthError::forbidden(ACCESS_DENIED))
        );
    }

    #[test]
    fn test_admin_may_access_any_resource() {
        let admin = claims(Role::Admin);
        assert!(require_ownership_or_admin(Some(&admin), &Uuid::new_v4().to_string()).is_ok());
        assert!(require_ownership_or_admin(Some(&admin), "not-a-uuid").is_ok());
    }

    #[test]
    fn test_ownership_edge_cases() {
        let participant = claims(Role::Participant);
        assert_eq!(
            require_ownership_or_admin(Some(&participant), "not-a-uuid"),
            Err(AuthError::forbidden(ACCESS_DENIED))
        );
        // Uppercase spelling of the own id still refers to the same user
        let upper = participant.user_id.to_string().to_uppercase();
        assert!(require_ownership_or_admin(Some(&participant), &upper).is_ok());

        assert_eq!(
            require_ownership_or_admin(None, &participant.user_id.to_string()),
            Err(AuthError::Unauthenticated)
        );
    }
}
