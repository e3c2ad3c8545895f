use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::dto::{UserEnvelope, UserResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/auth/me
pub async fn me(state: web::Data<AppState>, auth: AuthContext) -> Result<HttpResponse, ApiError> {
    let user = state.auth_service.current_user(auth.claims()).await?;

    Ok(HttpResponse::Ok().json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}
