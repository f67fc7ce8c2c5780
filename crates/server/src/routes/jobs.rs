use axum::extract::{Multipart, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::job;
use serde::Deserialize;
use service::jobs::domain::{CreateJob, JobDetail, JobFilter, PublicJob, PublicJobFilter, UpdateJob};
use service::pagination::Page;
use uuid::Uuid;

use super::uploads::collect_files;
use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/jobs", get(list_public)).route("/jobs/:slug", get(view_public))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/jobs", get(list).post(create))
        .route("/admin/jobs/edit/:id", patch(update))
        .route("/admin/jobs/detail/:id", get(detail))
        .route("/admin/jobs/:id/images", post(add_images))
        .route("/admin/jobs/remove-image/:id", patch(remove_image))
        .route("/admin/jobs/delete/:id", patch(remove))
        .route("/admin/jobs/toggle-status/:id", patch(toggle_status))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveImage {
    pub image_url: String,
}

#[utoipa::path(get, path = "/jobs", tag = "jobs", responses((status = 200, description = "Paged public jobs")))]
pub async fn list_public(State(state): State<AppState>, ApiQuery(filter): ApiQuery<PublicJobFilter>) -> ApiResult<Json<Page<PublicJob>>> {
    Ok(Json(state.jobs.list_public(&filter).await?))
}

#[utoipa::path(get, path = "/jobs/{slug}", tag = "jobs", params(("slug" = String, Path, description = "Job slug")),
    responses((status = 200, description = "Public job"), (status = 404, description = "Not Found")))]
pub async fn view_public(State(state): State<AppState>, ApiPath(slug): ApiPath<String>) -> ApiResult<Json<PublicJob>> {
    Ok(Json(state.jobs.view_public(&slug).await?))
}

#[utoipa::path(get, path = "/admin/jobs", tag = "jobs", responses((status = 200, description = "Paged jobs")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<JobFilter>) -> ApiResult<Json<Page<job::Model>>> {
    Ok(Json(state.jobs.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/jobs", tag = "jobs", request_body = crate::openapi::CreateJobDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateJob>) -> ApiResult<Json<job::Model>> {
    Ok(Json(state.jobs.create(input).await?))
}

#[utoipa::path(patch, path = "/admin/jobs/edit/{id}", tag = "jobs", params(("id" = Uuid, Path, description = "Job ID")),
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateJob>) -> ApiResult<Json<job::Model>> {
    Ok(Json(state.jobs.update(id, input).await?))
}

#[utoipa::path(get, path = "/admin/jobs/detail/{id}", tag = "jobs", params(("id" = Uuid, Path, description = "Job ID")),
    responses((status = 200, description = "Job with category title"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<JobDetail>> {
    Ok(Json(state.jobs.detail(id).await?))
}

#[utoipa::path(post, path = "/admin/jobs/{id}/images", tag = "jobs", params(("id" = Uuid, Path, description = "Job ID")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses((status = 200, description = "Images appended"), (status = 400, description = "Bad upload"), (status = 404, description = "Not Found")))]
pub async fn add_images(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, multipart: Multipart) -> ApiResult<Json<job::Model>> {
    let files = collect_files(multipart, "files").await?;
    Ok(Json(state.jobs.add_images(id, files).await?))
}

#[utoipa::path(patch, path = "/admin/jobs/remove-image/{id}", tag = "jobs", params(("id" = Uuid, Path, description = "Job ID")),
    responses((status = 200, description = "Image removed"), (status = 404, description = "Not Found")))]
pub async fn remove_image(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(body): ApiJson<RemoveImage>) -> ApiResult<Json<job::Model>> {
    Ok(Json(state.jobs.remove_image(id, &body.image_url).await?))
}

#[utoipa::path(patch, path = "/admin/jobs/delete/{id}", tag = "jobs", params(("id" = Uuid, Path, description = "Job ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.jobs.delete(id).await?;
    Ok(Json(MessageResponse::new("Job deleted")))
}

#[utoipa::path(patch, path = "/admin/jobs/toggle-status/{id}", tag = "jobs", params(("id" = Uuid, Path, description = "Job ID")),
    responses((status = 200, description = "Toggled"), (status = 404, description = "Not Found")))]
pub async fn toggle_status(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<job::Model>> {
    Ok(Json(state.jobs.toggle_status(id).await?))
}
