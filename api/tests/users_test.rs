//! Integration tests for payment tracking

mod common;

use actix_web::test;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{bearer, TestContext, MAX_PAYLOAD};
use ha_api::create_app;
use ha_shared::config::CorsConfig;

#[actix_web::test]
async fn test_payment_status_update_notifies_participant() {
    let ctx = TestContext::new();
    let (_, admin_token) = ctx.admin().await;
    let (morten, morten_token) = ctx.participant("Morten").await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::get()
        .uri("/api/users/payment-status")
        .insert_header(bearer(&morten_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["hasPaid"], false);
    assert_eq!(body["name"], "Morten");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}/payment-status", morten.id))
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "hasPaid": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Payment status updated successfully");
    assert_eq!(body["user"]["hasPaid"], true);

    let req = test::TestRequest::get()
        .uri("/api/users/payment-status")
        .insert_header(bearer(&morten_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["hasPaid"], true);

    let req = test::TestRequest::get()
        .uri("/api/notifications")
        .insert_header(bearer(&morten_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["notifications"][0]["title"], "Payment status updated");
}

#[actix_web::test]
async fn test_payment_status_validation_and_missing_user() {
    let ctx = TestContext::new();
    let (_, admin_token) = ctx.admin().await;
    let (leo, leo_token) = ctx.participant("Leo").await;
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default(), MAX_PAYLOAD)).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}/payment-status", leo.id))
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "hasPaid": "yes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "hasPaid must be a boolean");

    let req = test::TestRequest::put()
        .uri("/api/users/not-a-uuid/payment-status")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "hasPaid": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid user ID");

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}/payment-status", Uuid::new_v4()))
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "hasPaid": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Participants cannot change their own flag
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}/payment-status", leo.id))
        .insert_header(bearer(&leo_token))
        .set_json(json!({ "hasPaid": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);
}
