//! Registration, login and current-user lookup

use std::sync::Arc;

use crate::domain::entities::identity::IdentityClaims;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;
use crate::services::validation::{LoginRequest, RegisterRequest};

/// An authenticated user together with a freshly issued token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Authentication service for account creation and sign-in
pub struct AuthService {
    /// User repository for database operations
    user_repository: Arc<dyn UserRepository>,
    /// Credential hasher
    hasher: PasswordHasher,
    /// Token service for JWT issuance
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            hasher,
            token_service,
        }
    }

    /// Register a new participant and sign them in
    ///
    /// # Errors
    ///
    /// * `DomainError::Conflict` - The email is already registered
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<AuthSession> {
        if self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict {
                message: "A user with this email already exists".to_string(),
            });
        }

        let password_hash = self.hasher.hash(&request.password).await?;
        let user = self
            .user_repository
            .create(User::new_participant(request.name, request.email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "New participant registered");
        self.session_for(user)
    }

    /// Sign in with email and password
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> DomainResult<AuthSession> {
        let user = match self.user_repository.find_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("Login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(&request.password, &user.password_hash).await {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "User logged in");
        self.session_for(user)
    }

    /// Load the user behind a verified token
    pub async fn current_user(&self, claims: &IdentityClaims) -> DomainResult<User> {
        self.user_repository
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    fn session_for(&self, user: User) -> DomainResult<AuthSession> {
        let token = self.token_service.issue(&IdentityClaims::from(&user))?;
        Ok(AuthSession { user, token })
    }
}
