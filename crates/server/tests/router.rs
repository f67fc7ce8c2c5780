use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use server::routes::build_router;
use server::state::AppState;
use service::auth::token::{self, TokenConfig};
use service::media::mock::MockMediaStore;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

const SECRET: &str = "router-test-secret";

fn tokens() -> TokenConfig {
    TokenConfig { jwt_secret: SECRET.into(), ttl_hours: 1 }
}

fn app() -> Router {
    let upload_dir = std::env::temp_dir().join(format!("recruit-router-{}", std::process::id()));
    let state = AppState::new(DatabaseConnection::Disconnected, tokens(), Arc::new(MockMediaStore::default()), upload_dir);
    build_router(state, CorsLayer::very_permissive())
}

async fn json_body(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let res = app().oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["status"], "ok");
}

#[tokio::test]
async fn metrics_are_exposed() {
    let app = app();
    let _ = app.clone().oneshot(Request::get("/health").body(Body::empty()).unwrap()).await.unwrap();
    let res = app.oneshot(Request::get("/metrics").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(res.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();
    assert!(text.contains("recruit_http_requests_total"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let res = app().oneshot(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = json_body(res).await;
    assert!(doc["paths"]["/admin/jobs"].is_object());
}

#[tokio::test]
async fn admin_routes_without_credentials_are_bad_requests() {
    for uri in ["/admin/jobs", "/admin/accounts", "/admin/holland/results", "/auth/me"] {
        let res = app().oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = json_body(res).await;
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn bad_tokens_are_unauthorized() {
    let cases = [
        (header::AUTHORIZATION, "Bearer not-a-jwt".to_string()),
        (header::AUTHORIZATION, "Basic YWRtaW46YWRtaW4=".to_string()),
        (header::COOKIE, "auth_token=garbage".to_string()),
    ];
    for (name, value) in cases {
        let req = Request::get("/admin/job-packages").header(name.clone(), value.as_str()).body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{name}: {value}");
    }
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let other = TokenConfig { jwt_secret: "someone-else".into(), ttl_hours: 1 };
    let jwt = token::issue(&other, Uuid::new_v4(), "a@b.co", vec!["admin".into()]).unwrap();
    let req = Request::get("/admin/job-packages").header(header::AUTHORIZATION, format!("Bearer {jwt}")).body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

fn bearer() -> String {
    let jwt = token::issue(&tokens(), Uuid::new_v4(), "a@b.co", vec!["admin".into()]).unwrap();
    format!("Bearer {jwt}")
}

#[tokio::test]
async fn valid_token_passes_the_guard() {
    // validation fails before any storage access
    let req = Request::post("/admin/banner-packages")
        .header(header::AUTHORIZATION, bearer())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":" ","position":"BELOW_SEARCH_BAR","durationDays":7,"price":1,"maxBannerSlots":1}"#))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "Validation Error");
}

#[tokio::test]
async fn malformed_path_id_gets_json_error() {
    let req = Request::get("/admin/job-packages/not-a-uuid").header(header::AUTHORIZATION, bearer()).body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert_eq!(body["error"], "Bad Request");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn fractional_holland_answer_gets_json_error() {
    let body = format!(r#"{{"answers":[{{"questionId":"{}","answer":2.5}}]}}"#, Uuid::new_v4());
    let req = Request::post("/holland/submit").header(header::CONTENT_TYPE, "application/json").body(Body::from(body)).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(res).await["error"].is_string());
}

#[tokio::test]
async fn empty_holland_submission_is_rejected_before_storage() {
    let req = Request::post("/holland/submit")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"answers":[]}"#))
        .unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "Validation Error");
}

#[tokio::test]
async fn logout_clears_cookie() {
    let req = Request::post("/auth/logout").header(header::COOKIE, "auth_token=abc").body(Body::empty()).unwrap();
    let res = app().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let cookie = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("auth_token=;"), "{cookie}");
    assert!(cookie.contains("Max-Age=0"), "{cookie}");
}
