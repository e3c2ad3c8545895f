//! Integration tests for notifications

mod common;

use actix_web::test;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{bearer, TestContext, MAX_PAYLOAD};
use ha_api::create_app;
use ha_shared::config::CorsConfig;

#[actix_web::test]
async fn test_broadcast_reaches_every_participant() {
    let ctx = TestContext::new();
    let (_, admin_token) = ctx.admin().await;
    let (_, felix_token) = ctx.participant("Felix").await;
    ctx.participant("Morten").await;
    ctx.participant("Jessi").await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "title": "Packing list", "body": "Bring towels!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Notification sent to 3 participants");

    let req = test::TestRequest::get()
        .uri("/api/notifications/unread-count")
        .insert_header(bearer(&felix_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["unreadCount"], 1);

    let req = test::TestRequest::get()
        .uri("/api/notifications/all")
        .insert_header(bearer(&admin_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let all = body["notifications"].as_array().unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|n| n["user"]["email"].is_string()));
}

#[actix_web::test]
async fn test_direct_notification_to_unknown_user() {
    let ctx = TestContext::new();
    let (_, admin_token) = ctx.admin().await;
    let (leo, _) = ctx.participant("Leo").await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "userId": Uuid::new_v4(), "title": "Hi", "body": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::post()
        .uri("/api/notifications")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "userId": leo.id, "title": "Hi", "body": "Hello" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Notification sent successfully");
}

#[actix_web::test]
async fn test_participant_cannot_send_or_list_all() {
    let ctx = TestContext::new();
    let (_, token) = ctx.participant("Jose").await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications")
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "Hi", "body": "Hello" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);

    let req = test::TestRequest::get()
        .uri("/api/notifications/all")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 403);
}

#[actix_web::test]
async fn test_mark_read_only_own_notifications() {
    let ctx = TestContext::new();
    let (_, admin_token) = ctx.admin().await;
    let (felix, felix_token) = ctx.participant("Felix").await;
    let (_, morten_token) = ctx.participant("Morten").await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    for title in ["First", "Second"] {
        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .insert_header(bearer(&admin_token))
            .set_json(json!({ "userId": felix.id, "title": title, "body": "..." }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/notifications")
        .insert_header(bearer(&felix_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let first_id = body["notifications"][0]["id"].as_str().unwrap().to_string();

    // Someone else's notification looks like a missing one
    let req = test::TestRequest::put()
        .uri(&format!("/api/notifications/{}/read", first_id))
        .insert_header(bearer(&morten_token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    let req = test::TestRequest::put()
        .uri(&format!("/api/notifications/{}/read", first_id))
        .insert_header(bearer(&felix_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Notification marked as read");

    let req = test::TestRequest::get()
        .uri("/api/notifications/unread-count")
        .insert_header(bearer(&felix_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["unreadCount"], 1);

    let req = test::TestRequest::put()
        .uri("/api/notifications/read-all")
        .insert_header(bearer(&felix_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "All notifications marked as read");

    let req = test::TestRequest::get()
        .uri("/api/notifications/unread-count")
        .insert_header(bearer(&felix_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["unreadCount"], 0);
}

#[actix_web::test]
async fn test_create_requires_body() {
    let ctx = TestContext::new();
    let (_, admin_token) = ctx.admin().await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "title": "Hi", "body": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Message is required");
}
