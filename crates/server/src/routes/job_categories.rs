use axum::extract::State;
use axum::routing::{get, patch};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::job_category;
use service::job_categories::domain::{CategoryFilter, CreateCategory, UpdateCategory};
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/job-categories", get(list_public))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/job-categories", get(list).post(create))
        .route("/admin/job-categories/:id", patch(update))
        .route("/admin/job-categories/detail/:id", get(detail))
        .route("/admin/job-categories/delete/:id", patch(remove))
        .route("/admin/job-categories/toggle-status/:id", patch(toggle_status))
}

#[utoipa::path(get, path = "/job-categories", tag = "job-categories", responses((status = 200, description = "Active categories by title")))]
pub async fn list_public(State(state): State<AppState>) -> ApiResult<Json<Vec<job_category::Model>>> {
    Ok(Json(state.job_categories.list_public().await?))
}

#[utoipa::path(get, path = "/admin/job-categories", tag = "job-categories", responses((status = 200, description = "Paged categories")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<CategoryFilter>) -> ApiResult<Json<Page<job_category::Model>>> {
    Ok(Json(state.job_categories.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/job-categories", tag = "job-categories", request_body = crate::openapi::CreateCategoryDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateCategory>) -> ApiResult<Json<job_category::Model>> {
    Ok(Json(state.job_categories.create(input).await?))
}

#[utoipa::path(get, path = "/admin/job-categories/detail/{id}", tag = "job-categories", params(("id" = Uuid, Path, description = "Category ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<job_category::Model>> {
    Ok(Json(state.job_categories.get(id).await?))
}

#[utoipa::path(patch, path = "/admin/job-categories/{id}", tag = "job-categories", params(("id" = Uuid, Path, description = "Category ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateCategory>) -> ApiResult<Json<job_category::Model>> {
    Ok(Json(state.job_categories.update(id, input).await?))
}

#[utoipa::path(patch, path = "/admin/job-categories/delete/{id}", tag = "job-categories", params(("id" = Uuid, Path, description = "Category ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.job_categories.delete(id).await?;
    Ok(Json(MessageResponse::new("Job category deleted")))
}

#[utoipa::path(patch, path = "/admin/job-categories/toggle-status/{id}", tag = "job-categories", params(("id" = Uuid, Path, description = "Category ID")),
    responses((status = 200, description = "Toggled"), (status = 404, description = "Not Found")))]
pub async fn toggle_status(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<job_category::Model>> {
    Ok(Json(state.job_categories.toggle_status(id).await?))
}
