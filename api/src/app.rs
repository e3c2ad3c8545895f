//! Application state and factory
//!
//! This module wires the services into shared state and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use ha_core::repositories::memory::{
    InMemoryActivityRepository, InMemoryNotificationRepository, InMemoryUserRepository,
};
use ha_core::repositories::{ActivityRepository, NotificationRepository, UserRepository};
use ha_core::services::{
    ActivityService, AuthService, NotificationService, PasswordHasher, TokenService, UserService,
};
use ha_shared::config::{CorsConfig, Environment};

use crate::handlers::{json_config, route_not_found};
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{activities, auth, cabin, health, notifications, users};

/// The storage backends every service is built from
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub activities: Arc<dyn ActivityRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
}

impl Repositories {
    /// Process-local stores, used by tests and storage-less runs
    pub fn in_memory() -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        Self {
            activities: Arc::new(InMemoryActivityRepository::new(users.clone())),
            notifications: Arc::new(InMemoryNotificationRepository::new(users.clone())),
            users,
        }
    }
}

/// Application state that holds shared services
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub activity_service: Arc<ActivityService>,
    pub notification_service: Arc<NotificationService>,
    pub token_service: Arc<TokenService>,
    pub environment: Environment,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        hasher: PasswordHasher,
        token_service: Arc<TokenService>,
        environment: Environment,
    ) -> Self {
        let Repositories {
            users,
            activities,
            notifications,
        } = repositories;

        Self {
            auth_service: Arc::new(AuthService::new(
                users.clone(),
                hasher,
                token_service.clone(),
            )),
            user_service: Arc::new(UserService::new(users.clone(), notifications.clone())),
            activity_service: Arc::new(ActivityService::new(
                activities,
                users.clone(),
                notifications.clone(),
            )),
            notification_service: Arc::new(NotificationService::new(notifications, users)),
            token_service,
            environment,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    cors: &CorsConfig,
    max_payload_size: usize,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let jwt = JwtAuth::new(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .app_data(json_config(max_payload_size))
        // Last wrap runs first: request logging, then CORS
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/cabin-info", web::get().to(cabin::cabin_info))
                .service(auth::routes(&jwt))
                .service(users::routes(&jwt))
                .service(activities::routes(&jwt))
                .service(notifications::routes(&jwt)),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    route_not_found()
}
