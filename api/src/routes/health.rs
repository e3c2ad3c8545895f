use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::app::AppState;

/// Health check endpoint handler
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
        "environment": state.environment.to_string(),
    }))
}
