use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use ha_api::app::{create_app, AppState, Repositories};
use ha_core::services::{PasswordHasher, TokenService};
use ha_infra::{
    DatabasePool, DemoSeeder, MySqlActivityRepository, MySqlNotificationRepository,
    MySqlUserRepository,
};
use ha_shared::config::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Environment::from_env().default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start with invalid configuration");
            return Err(e.into());
        }
    };

    tracing::info!(environment = %config.environment, "Starting HuettenApp API server");

    let pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    pool.run_migrations().await.context("Failed to run migrations")?;

    let repositories = Repositories {
        users: Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
        activities: Arc::new(MySqlActivityRepository::new(pool.get_pool().clone())),
        notifications: Arc::new(MySqlNotificationRepository::new(pool.get_pool().clone())),
    };
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost);
    let token_service = Arc::new(TokenService::new(&config.auth.jwt)?);

    if config.seed_demo_data {
        DemoSeeder::new(
            repositories.users.clone(),
            repositories.activities.clone(),
            repositories.notifications.clone(),
            hasher,
        )
        .run()
        .await
        .context("Failed to seed demo data")?;
    }

    let state = web::Data::new(AppState::new(
        repositories,
        hasher,
        token_service,
        config.environment,
    ));

    let bind_address = config.server.bind_address();
    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone(), &cors, max_payload_size));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}
