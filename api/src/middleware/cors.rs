//! CORS middleware configuration for cross-origin requests.
//!
//! Origins come from `CorsConfig` (`CORS_ORIGINS`, default
//! `http://localhost:3000`). A `*` entry admits any origin.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ha_shared::config::CorsConfig;

/// Creates a CORS middleware instance from the loaded configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(config: &CorsConfig, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(config))
                .route(
                    "/api/activities",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                ),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/activities")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        match test::try_call_service(&app, req).await {
            Ok(resp) => resp.status(),
            Err(e) => e.as_response_error().status_code(),
        }
    }

    #[actix_web::test]
    async fn test_configured_origin_is_allowed() {
        let config = CorsConfig::default();
        assert_eq!(preflight(&config, "http://localhost:3000").await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_origin_is_rejected() {
        let config = CorsConfig::default();
        assert_ne!(preflight(&config, "https://evil.example").await, StatusCode::OK);
    }
}
