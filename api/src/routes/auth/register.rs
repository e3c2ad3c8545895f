use actix_web::{web, HttpResponse};

use ha_core::services::validation::RegisterRequest;

use crate::app::AppState;
use crate::dto::AuthResponse;
use crate::handlers::{ApiError, ValidatedJson};

/// Handler for POST /api/auth/register
///
/// Creates a participant account and signs it in.
///
/// # Request Body
///
/// ```json
/// { "name": "Felix", "email": "felix@example.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// `{ "message", "user", "token" }`
///
/// ## Errors
/// - 400 `validation_error`
/// - 409 `conflict` when the email is already registered
pub async fn register(
    state: web::Data<AppState>,
    request: ValidatedJson<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let session = state.auth_service.register(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(AuthResponse::new("User registered successfully", session)))
}
