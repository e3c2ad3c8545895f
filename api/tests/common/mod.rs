//! Shared setup for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{http::header, web};

use ha_api::app::{AppState, Repositories};
use ha_core::domain::entities::identity::IdentityClaims;
use ha_core::domain::entities::user::{Role, User};
use ha_core::services::{PasswordHasher, TokenService};
use ha_shared::config::{Environment, JwtConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const MAX_PAYLOAD: usize = 10 * 1024 * 1024;
pub const PASSWORD: &str = "password123";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub repositories: Repositories,
    pub hasher: PasswordHasher,
}

impl TestContext {
    /// In-memory storage and the cheapest bcrypt cost
    pub fn new() -> Self {
        let repositories = Repositories::in_memory();
        let hasher = PasswordHasher::new(4);
        let token_service =
            Arc::new(TokenService::new(&JwtConfig::new(TEST_SECRET)).expect("token service"));
        let state = web::Data::new(AppState::new(
            repositories.clone(),
            hasher,
            token_service,
            Environment::Development,
        ));

        Self {
            state,
            repositories,
            hasher,
        }
    }

    /// Store a user directly and issue a token for them
    pub async fn create_user(&self, name: &str, email: &str, role: Role) -> (User, String) {
        let hash = self.hasher.hash(PASSWORD).await.unwrap();
        let user = self
            .repositories
            .users
            .create(User::new(name.to_string(), email.to_string(), hash, role))
            .await
            .unwrap();
        let token = self
            .state
            .token_service
            .issue(&IdentityClaims::from(&user))
            .unwrap();
        (user, token)
    }

    pub async fn admin(&self) -> (User, String) {
        self.create_user("Paul", "paul@huettenapp.de", Role::Admin).await
    }

    pub async fn participant(&self, name: &str) -> (User, String) {
        let email = format!("{}@example.com", name.to_lowercase());
        self.create_user(name, &email, Role::Participant).await
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}
