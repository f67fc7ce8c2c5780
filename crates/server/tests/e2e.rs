//! End-to-end flow against a real Postgres; skipped without `DATABASE_URL`.

use configs::AppConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};
use server::startup::{build_state, serve};
use tokio::net::TcpListener;
use uuid::Uuid;

const ADMIN_EMAIL: &str = "e2e-admin@example.com";
const ADMIN_PASSWORD: &str = "e2e-password";

async fn start_server() -> Option<String> {
    let url = std::env::var("DATABASE_URL").ok()?;
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let mut cfg = AppConfig::default();
    cfg.database.url = url;
    cfg.database.min_connections = 1;
    cfg.auth.jwt_secret = "e2e-secret".into();
    cfg.auth.admin_email = Some(ADMIN_EMAIL.into());
    cfg.auth.admin_password = Some(ADMIN_PASSWORD.into());
    cfg.media.upload_dir = std::env::temp_dir().join(format!("recruit-e2e-{}", Uuid::new_v4())).to_string_lossy().into_owned();
    cfg.normalize_and_validate().ok()?;

    let state = build_state(&cfg).await.ok()?;
    let listener = TcpListener::bind("127.0.0.1:0").await.ok()?;
    let addr = listener.local_addr().ok()?;
    tokio::spawn(serve(listener, state, std::future::pending()));
    Some(format!("http://{addr}"))
}

#[tokio::test]
async fn admin_login_then_category_and_public_listing() {
    let Some(base) = start_server().await else {
        eprintln!("DATABASE_URL missing; skipping e2e");
        return;
    };
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("set-cookie").is_some());
    let session: Value = res.json().await.unwrap();
    let token = session["token"].as_str().unwrap().to_string();

    let res = client.get(format!("{base}/auth/me")).bearer_auth(&token).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let title = format!("Kỹ thuật phần mềm {}", Uuid::new_v4().simple());
    let res = client
        .post(format!("{base}/admin/job-categories"))
        .bearer_auth(&token)
        .json(&json!({ "title": title }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let category: Value = res.json().await.unwrap();
    assert!(category["slug"].as_str().unwrap().starts_with("ky-thuat-phan-mem-"));

    let res = client.get(format!("{base}/job-categories")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(format!("{base}/jobs")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page: Value = res.json().await.unwrap();
    assert!(page["data"].is_array());

    let res = client.get(format!("{base}/admin/jobs")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let Some(base) = start_server().await else {
        return;
    };
    let res = reqwest::Client::new()
        .post(format!("{base}/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": "not-the-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
