use actix_web::{web, HttpResponse};

use ha_core::services::validation::LoginRequest;

use crate::app::AppState;
use crate::dto::AuthResponse;
use crate::handlers::{ApiError, ValidatedJson};

/// Handler for POST /api/auth/login
///
/// Unknown email and wrong password both answer 401 `invalid_credentials`
/// with the same message.
pub async fn login(
    state: web::Data<AppState>,
    request: ValidatedJson<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let session = state.auth_service.login(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AuthResponse::new("Login successful", session)))
}
