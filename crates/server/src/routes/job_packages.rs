use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use common::types::MessageResponse;
use models::job_package;
use service::job_packages::domain::{CreateJobPackage, JobPackageFilter, UpdateJobPackage};
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/job-packages", get(list_public))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/job-packages", get(list).post(create))
        .route("/admin/job-packages/:id", get(detail).patch(update).delete(remove))
}

#[utoipa::path(get, path = "/job-packages", tag = "job-packages", responses((status = 200, description = "Active packages by priority")))]
pub async fn list_public(State(state): State<AppState>) -> ApiResult<Json<Vec<job_package::Model>>> {
    Ok(Json(state.job_packages.list_public().await?))
}

#[utoipa::path(get, path = "/admin/job-packages", tag = "job-packages", responses((status = 200, description = "Paged packages")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<JobPackageFilter>) -> ApiResult<Json<Page<job_package::Model>>> {
    Ok(Json(state.job_packages.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/job-packages", tag = "job-packages", request_body = crate::openapi::CreateJobPackageDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateJobPackage>) -> ApiResult<Json<job_package::Model>> {
    Ok(Json(state.job_packages.create(input).await?))
}

#[utoipa::path(get, path = "/admin/job-packages/{id}", tag = "job-packages", params(("id" = Uuid, Path, description = "Package ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<job_package::Model>> {
    Ok(Json(state.job_packages.get(id).await?))
}

#[utoipa::path(patch, path = "/admin/job-packages/{id}", tag = "job-packages", params(("id" = Uuid, Path, description = "Package ID")),
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateJobPackage>) -> ApiResult<Json<job_package::Model>> {
    Ok(Json(state.job_packages.update(id, input).await?))
}

#[utoipa::path(delete, path = "/admin/job-packages/{id}", tag = "job-packages", params(("id" = Uuid, Path, description = "Package ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.job_packages.delete(id).await?;
    Ok(Json(MessageResponse::new("Job package deleted")))
}
