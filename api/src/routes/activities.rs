//! Trip schedule.

use actix_web::{web, HttpResponse, Scope};

use ha_core::services::validation::{CreateActivityRequest, UpdateActivityRequest};

use super::parse_id;
use crate::app::AppState;
use crate::dto::{ActivityEnvelope, ActivityListResponse, ActivityResponse, MessageResponse};
use crate::handlers::{ApiError, ValidatedJson};
use crate::middleware::{AuthContext, JwtAuth, RequireAdmin};

const RESOURCE: &str = "Activity";

pub fn routes(jwt: &JwtAuth) -> Scope {
    web::scope("/activities")
        .route("", web::get().to(list_activities).wrap(jwt.clone()))
        .route(
            "",
            web::post()
                .to(create_activity)
                .wrap(RequireAdmin)
                .wrap(jwt.clone()),
        )
        .route("/{activityId}", web::get().to(get_activity).wrap(jwt.clone()))
        .route(
            "/{activityId}",
            web::put()
                .to(update_activity)
                .wrap(RequireAdmin)
                .wrap(jwt.clone()),
        )
        .route(
            "/{activityId}",
            web::delete()
                .to(delete_activity)
                .wrap(RequireAdmin)
                .wrap(jwt.clone()),
        )
}

/// GET /api/activities, earliest start first
pub async fn list_activities(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let activities = state.activity_service.list().await?;

    Ok(HttpResponse::Ok().json(ActivityListResponse {
        activities: activities.into_iter().map(ActivityResponse::from).collect(),
    }))
}

pub async fn get_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, RESOURCE)?;
    let activity = state.activity_service.get(id).await?;

    Ok(HttpResponse::Ok().json(ActivityEnvelope {
        message: None,
        activity: activity.into(),
    }))
}

/// POST /api/activities
///
/// Every participant other than the creator is notified.
pub async fn create_activity(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: ValidatedJson<CreateActivityRequest>,
) -> Result<HttpResponse, ApiError> {
    let activity = state
        .activity_service
        .create(auth.claims(), request.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ActivityEnvelope {
        message: Some("Activity created successfully".to_string()),
        activity: activity.into(),
    }))
}

/// PUT /api/activities/{activityId}; only the fields present are changed
pub async fn update_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: ValidatedJson<UpdateActivityRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, RESOURCE)?;
    let activity = state
        .activity_service
        .update(id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ActivityEnvelope {
        message: Some("Activity updated successfully".to_string()),
        activity: activity.into(),
    }))
}

pub async fn delete_activity(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, RESOURCE)?;
    state.activity_service.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Activity deleted successfully")))
}
