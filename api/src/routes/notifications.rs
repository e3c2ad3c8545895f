//! Notification feed, read markers and organizer broadcasts.

use actix_web::{web, HttpResponse, Scope};

use ha_core::services::validation::CreateNotificationRequest;
use ha_core::services::Delivery;

use super::parse_id;
use crate::app::AppState;
use crate::dto::{
    MessageResponse, NotificationListResponse, NotificationResponse,
    NotificationWithRecipientResponse, UnreadCountResponse,
};
use crate::handlers::{ApiError, ValidatedJson};
use crate::middleware::{AuthContext, JwtAuth, RequireAdmin};

pub fn routes(jwt: &JwtAuth) -> Scope {
    web::scope("/notifications")
        .route("", web::get().to(my_notifications).wrap(jwt.clone()))
        .route(
            "",
            web::post()
                .to(create_notification)
                .wrap(RequireAdmin)
                .wrap(jwt.clone()),
        )
        .route(
            "/all",
            web::get()
                .to(all_notifications)
                .wrap(RequireAdmin)
                .wrap(jwt.clone()),
        )
        .route("/unread-count", web::get().to(unread_count).wrap(jwt.clone()))
        .route("/read-all", web::put().to(mark_all_read).wrap(jwt.clone()))
        .route(
            "/{notificationId}/read",
            web::put().to(mark_read).wrap(jwt.clone()),
        )
}

/// GET /api/notifications, the caller's feed newest first
pub async fn my_notifications(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let notifications = state.notification_service.list_for_user(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    }))
}

/// GET /api/notifications/all
pub async fn all_notifications(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let notifications = state.notification_service.list_all().await?;

    Ok(HttpResponse::Ok().json(NotificationListResponse {
        notifications: notifications
            .into_iter()
            .map(NotificationWithRecipientResponse::from)
            .collect(),
    }))
}

pub async fn unread_count(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    let unread_count = state.notification_service.unread_count(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(UnreadCountResponse { unread_count }))
}

/// POST /api/notifications
///
/// With `userId` the notification goes to that user only, otherwise to
/// every participant.
pub async fn create_notification(
    state: web::Data<AppState>,
    request: ValidatedJson<CreateNotificationRequest>,
) -> Result<HttpResponse, ApiError> {
    let message = match state.notification_service.send(request.into_inner()).await? {
        Delivery::Direct => "Notification sent successfully".to_string(),
        Delivery::Broadcast { recipients } => {
            format!("Notification sent to {} participants", recipients)
        }
    };

    Ok(HttpResponse::Created().json(MessageResponse::new(message)))
}

pub async fn mark_all_read(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError> {
    state.notification_service.mark_all_read(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("All notifications marked as read")))
}

/// PUT /api/notifications/{notificationId}/read
///
/// A notification owned by someone else is reported as not found.
pub async fn mark_read(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Notification")?;
    state.notification_service.mark_read(id, auth.user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Notification marked as read")))
}
