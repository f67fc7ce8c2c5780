use axum::extract::State;
use axum::routing::{delete, get, patch};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::cv_sample;
use serde::Serialize;
use service::cv_samples::domain::{CreateCvSample, CvSampleFilter, UpdateCvSample};
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// `{message, cvSample}` envelope of the admin console.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvSampleEnvelope {
    pub message: &'static str,
    pub cv_sample: cv_sample::Model,
}

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/cv-samples/active", get(list_active))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/cv-samples", get(list).post(create))
        .route("/admin/cv-samples/:id", get(detail).patch(update).delete(remove))
        .route("/admin/cv-samples/:id/hard", delete(hard_remove))
        .route("/admin/cv-samples/:id/toggle-active", patch(toggle_active))
}

#[utoipa::path(get, path = "/cv-samples/active", tag = "cv-samples", responses((status = 200, description = "Active templates, newest first")))]
pub async fn list_active(State(state): State<AppState>) -> ApiResult<Json<Vec<cv_sample::Model>>> {
    Ok(Json(state.cv_samples.list_active().await?))
}

#[utoipa::path(get, path = "/admin/cv-samples", tag = "cv-samples", responses((status = 200, description = "Paged templates")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<CvSampleFilter>) -> ApiResult<Json<Page<cv_sample::Model>>> {
    Ok(Json(state.cv_samples.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/cv-samples", tag = "cv-samples", request_body = crate::openapi::CreateCvSampleDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateCvSample>) -> ApiResult<Json<CvSampleEnvelope>> {
    let cv_sample = state.cv_samples.create(input).await?;
    Ok(Json(CvSampleEnvelope { message: "CV sample created", cv_sample }))
}

#[utoipa::path(get, path = "/admin/cv-samples/{id}", tag = "cv-samples", params(("id" = Uuid, Path, description = "CV sample ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<cv_sample::Model>> {
    Ok(Json(state.cv_samples.get(id).await?))
}

#[utoipa::path(patch, path = "/admin/cv-samples/{id}", tag = "cv-samples", params(("id" = Uuid, Path, description = "CV sample ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateCvSample>) -> ApiResult<Json<CvSampleEnvelope>> {
    let cv_sample = state.cv_samples.update(id, input).await?;
    Ok(Json(CvSampleEnvelope { message: "CV sample updated", cv_sample }))
}

#[utoipa::path(delete, path = "/admin/cv-samples/{id}", tag = "cv-samples", params(("id" = Uuid, Path, description = "CV sample ID")),
    responses((status = 200, description = "Soft deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.cv_samples.delete(id).await?;
    Ok(Json(MessageResponse::new("CV sample deleted")))
}

#[utoipa::path(delete, path = "/admin/cv-samples/{id}/hard", tag = "cv-samples", params(("id" = Uuid, Path, description = "CV sample ID")),
    responses((status = 200, description = "Removed"), (status = 404, description = "Not Found")))]
pub async fn hard_remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.cv_samples.hard_delete(id).await?;
    Ok(Json(MessageResponse::new("CV sample permanently deleted")))
}

#[utoipa::path(patch, path = "/admin/cv-samples/{id}/toggle-active", tag = "cv-samples", params(("id" = Uuid, Path, description = "CV sample ID")),
    responses((status = 200, description = "Toggled"), (status = 404, description = "Not Found")))]
pub async fn toggle_active(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<cv_sample::Model>> {
    Ok(Json(state.cv_samples.toggle_active(id).await?))
}
