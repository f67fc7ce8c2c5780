use axum::routing::get;
use axum::{middleware, Json, Router};
use common::types::Health;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use crate::{auth as guard, metrics};

pub mod accounts;
pub mod auth;
pub mod banners;
pub mod blogs;
pub mod cv_samples;
pub mod holland;
pub mod job_categories;
pub mod job_packages;
pub mod jobs;
pub mod recruiters;
pub mod roles;
pub mod site_settings;
pub mod uploads;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Routes reachable without a token.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::render))
        .merge(auth::public_routes())
        .merge(job_categories::public_routes())
        .merge(jobs::public_routes())
        .merge(cv_samples::public_routes())
        .merge(blogs::public_routes())
        .merge(banners::public_routes())
        .merge(job_packages::public_routes())
        .merge(holland::public_routes())
        .merge(site_settings::public_routes())
}

/// `/admin/*`, `/upload/*` and `/auth/me`, all behind the token guard.
fn guarded_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(auth::guarded_routes())
        .merge(accounts::routes())
        .merge(roles::routes())
        .merge(job_categories::admin_routes())
        .merge(jobs::admin_routes())
        .merge(recruiters::routes())
        .merge(cv_samples::admin_routes())
        .merge(blogs::admin_routes())
        .merge(banners::admin_routes())
        .merge(job_packages::admin_routes())
        .merge(holland::admin_routes())
        .merge(site_settings::admin_routes())
        .merge(uploads::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), guard::require_auth))
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let uploads = ServeDir::new(state.upload_dir.clone());
    Router::new()
        .merge(public_routes())
        .merge(guarded_routes(&state))
        .nest_service("/uploads", uploads)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(metrics::track))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
