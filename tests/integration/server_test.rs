//! HTTP handler tests against the axum router.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use folio::portfolio::store::bundled;
use folio::server::{router, AppState};
use folio::PortfolioStore;

use crate::helpers::load_fixture;

fn app_with(store: PortfolioStore) -> Router {
    router(AppState::new(store))
}

fn app() -> (Router, Arc<AppState>) {
    let state = AppState::new(PortfolioStore::with_data(bundled().unwrap()));
    (router(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ============================================================================
// GET /api/portfolio
// ============================================================================

#[tokio::test]
async fn get_returns_document_with_id() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/api/portfolio", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personal"]["name"], "Ian Iglipa");
    assert!(body["id"].as_str().is_some_and(|id| id.len() == 36));
    assert!(body["interactiveElements"]["quotes"].is_array());
}

#[tokio::test]
async fn get_on_empty_store_is_404() {
    let app = app_with(PortfolioStore::empty());
    let (status, body) = send(&app, Method::GET, "/api/portfolio", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Portfolio not found" }));
}

// ============================================================================
// PUT /api/portfolio
// ============================================================================

#[tokio::test]
async fn put_replaces_data_and_keeps_id() {
    let (app, state) = app();
    let before = state.store.get().await.unwrap();

    let update = load_fixture("portfolio_update.json");
    let (status, body) = send(&app, Method::PUT, "/api/portfolio", Some(&update)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], before.id.to_string());
    assert_eq!(body["personal"]["title"], "Game Creator");

    let (_, fetched) = send(&app, Method::GET, "/api/portfolio", None).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn put_ignores_client_id() {
    let (app, _) = app();
    let update = load_fixture("portfolio_update.json");
    let (_, body) = send(&app, Method::PUT, "/api/portfolio", Some(&update)).await;

    assert_ne!(body["id"], "11111111-2222-3333-4444-555555555555");
}

#[tokio::test]
async fn put_on_empty_store_assigns_id() {
    let app = app_with(PortfolioStore::empty());
    let update = load_fixture("portfolio_update.json");
    let (status, body) = send(&app, Method::PUT, "/api/portfolio", Some(&update)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn rejected_put_leaves_document_untouched() {
    let (app, state) = app();
    let before = state.store.get().await.unwrap();

    let fixture = load_fixture("portfolio_update.json");
    let skills_not_a_list = fixture.replace("\"skills\": [", "\"skills\": \"lots\", \"unused\": [");
    let level_not_a_number = fixture.replace("\"level\": 90", "\"level\": \"ninety\"");

    for bad in [
        "{ not json",
        r#"{"personal": {"name": "x"}}"#,
        skills_not_a_list.as_str(),
        level_not_a_number.as_str(),
    ] {
        let (status, body) = send(&app, Method::PUT, "/api/portfolio", Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(body, json!({ "message": "Invalid portfolio data" }));
    }

    assert_eq!(state.store.get().await.unwrap(), before);
}

#[tokio::test]
async fn put_then_get_returns_exactly_what_was_sent() {
    let (app, _) = app();

    let mut sent: Value = serde_json::from_str(&load_fixture("portfolio_update.json")).unwrap();
    sent.as_object_mut().unwrap().remove("id");
    sent["personal"]["location"] = json!("Manila");
    sent["personal"]["name"] = json!("");
    sent["skills"][0]["level"] = json!(85.5);
    sent["projects"][0]["category"] = json!("tool");
    sent["projects"][0]["stats"] = json!({ "users": 1000, "rating": "4.8" });
    sent["contact"]["website"] = json!("ianiglipa.dev");
    sent["footer"] = json!({ "year": 2024 });

    let (status, _) = send(&app, Method::PUT, "/api/portfolio", Some(&sent.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let (_, mut fetched) = send(&app, Method::GET, "/api/portfolio", None).await;
    assert!(fetched.as_object_mut().unwrap().remove("id").is_some());
    assert_eq!(fetched, sent);
}

// ============================================================================
// POST /api/contact
// ============================================================================

#[tokio::test]
async fn contact_accepts_complete_submission() {
    let (app, _) = app();
    let body = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "projectType": "web",
        "message": "Let's build something"
    })
    .to_string();
    let (status, response) = send(&app, Method::POST, "/api/contact", Some(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, json!({ "message": "Message sent successfully!" }));
}

#[tokio::test]
async fn contact_requires_name_email_and_message() {
    let (app, _) = app();
    for body in [
        json!({ "email": "ada@example.com", "message": "hi" }),
        json!({ "name": "Ada", "message": "hi" }),
        json!({ "name": "Ada", "email": "ada@example.com" }),
        json!({ "name": "  ", "email": "ada@example.com", "message": "hi" }),
        json!({}),
    ] {
        let (status, response) =
            send(&app, Method::POST, "/api/contact", Some(&body.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(
            response,
            json!({ "message": "Name, email, and message are required" })
        );
    }
}

#[tokio::test]
async fn contact_rejects_malformed_body() {
    let (app, _) = app();
    let (status, response) = send(&app, Method::POST, "/api/contact", Some("nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Malformed payload");
}

// ============================================================================
// Health and CORS
// ============================================================================

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn preflight_allows_put_from_any_origin() {
    let (app, _) = app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/portfolio")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _) = app();
    let (status, _) = send(&app, Method::GET, "/api/nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
