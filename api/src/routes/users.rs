//! Participant listing and payment tracking.

use actix_web::{web, HttpResponse, Scope};
use serde_json::Value;

use ha_core::services::validation::{validate_as, UpdatePaymentStatusRequest};

use super::parse_id;
use crate::app::AppState;
use crate::dto::{PaymentStatusResponse, UserEnvelope, UserListResponse, UserResponse, UserUpdatedResponse};
use crate::handlers::ApiError;
use crate::middleware::{AuthContext, JwtAuth, RequireAdmin, RequireOwnershipOrAdmin};

pub fn routes(jwt: &JwtAuth) -> Scope {
    web::scope("/users")
        .route(
            "",
            web::get().to(list_users).wrap(RequireAdmin).wrap(jwt.clone()),
        )
        // Registered before `/{userId}` so it is not taken for an id
        .route(
            "/payment-status",
            web::get().to(my_payment_status).wrap(jwt.clone()),
        )
        .route(
            "/{userId}",
            web::get()
                .to(get_user)
                .wrap(RequireOwnershipOrAdmin::default())
                .wrap(jwt.clone()),
        )
        .route(
            "/{userId}/payment-status",
            web::put()
                .to(update_payment_status)
                .wrap(RequireAdmin)
                .wrap(jwt.clone()),
        )
}

/// GET /api/users
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.user_service.list_users().await?;

    Ok(HttpResponse::Ok().json(UserListResponse {
        users: users.iter().map(UserResponse::from).collect(),
    }))
}

/// GET /api/users/payment-status
pub async fn my_payment_status(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_service.get_user(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(PaymentStatusResponse {
        id: user.id,
        name: user.name,
        has_paid: user.has_paid,
    }))
}

/// GET /api/users/{userId}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "User")?;
    let user = state.user_service.get_user(id).await?;

    Ok(HttpResponse::Ok().json(UserEnvelope {
        user: UserResponse::from(&user),
    }))
}

/// PUT /api/users/{userId}/payment-status
///
/// The path id is merged into the body before validation, so the
/// `update-payment-status` schema checks both.
pub async fn update_payment_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, ApiError> {
    let mut body = body.into_inner();
    if let Some(object) = body.as_object_mut() {
        object.insert("userId".to_string(), Value::String(path.into_inner()));
    }

    let request = validate_as::<UpdatePaymentStatusRequest>(&body)?;
    let user = state.user_service.update_payment_status(request).await?;

    Ok(HttpResponse::Ok().json(UserUpdatedResponse {
        message: "Payment status updated successfully".to_string(),
        user: UserResponse::from(&user),
    }))
}
