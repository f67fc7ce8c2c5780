use axum::extract::{Multipart, State};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::recruiter;
use service::pagination::Page;
use service::recruiters::domain::{CreateRecruiter, RecruiterFilter, UpdateRecruiter};
use uuid::Uuid;

use super::uploads::single_file;
use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/recruiters", get(list).post(create))
        .route("/admin/recruiters/detail/:id", get(detail))
        .route("/admin/recruiters/edit/:id", patch(update))
        .route("/admin/recruiters/:id/avatar", post(upload_avatar).delete(remove_avatar))
        .route("/admin/recruiters/delete/:id", patch(remove))
        .route("/admin/recruiters/toggle-status/:id", patch(toggle_status))
}

#[utoipa::path(get, path = "/admin/recruiters", tag = "recruiters", responses((status = 200, description = "Paged recruiters")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<RecruiterFilter>) -> ApiResult<Json<Page<recruiter::Model>>> {
    Ok(Json(state.recruiters.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/recruiters", tag = "recruiters", request_body = crate::openapi::CreateRecruiterDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Email in use")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateRecruiter>) -> ApiResult<Json<recruiter::Model>> {
    Ok(Json(state.recruiters.create(input).await?))
}

#[utoipa::path(get, path = "/admin/recruiters/detail/{id}", tag = "recruiters", params(("id" = Uuid, Path, description = "Recruiter ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<recruiter::Model>> {
    Ok(Json(state.recruiters.get(id).await?))
}

#[utoipa::path(patch, path = "/admin/recruiters/edit/{id}", tag = "recruiters", params(("id" = Uuid, Path, description = "Recruiter ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 409, description = "Email in use")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateRecruiter>) -> ApiResult<Json<recruiter::Model>> {
    Ok(Json(state.recruiters.update(id, input).await?))
}

#[utoipa::path(post, path = "/admin/recruiters/{id}/avatar", tag = "recruiters", params(("id" = Uuid, Path, description = "Recruiter ID")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses((status = 200, description = "Avatar replaced"), (status = 400, description = "Bad upload"), (status = 404, description = "Not Found")))]
pub async fn upload_avatar(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, multipart: Multipart) -> ApiResult<Json<recruiter::Model>> {
    let file = single_file(multipart, "file").await?;
    Ok(Json(state.recruiters.update_avatar(id, file).await?))
}

#[utoipa::path(delete, path = "/admin/recruiters/{id}/avatar", tag = "recruiters", params(("id" = Uuid, Path, description = "Recruiter ID")),
    responses((status = 200, description = "Avatar cleared"), (status = 404, description = "Not Found")))]
pub async fn remove_avatar(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<recruiter::Model>> {
    Ok(Json(state.recruiters.remove_avatar(id).await?))
}

#[utoipa::path(patch, path = "/admin/recruiters/delete/{id}", tag = "recruiters", params(("id" = Uuid, Path, description = "Recruiter ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.recruiters.delete(id).await?;
    Ok(Json(MessageResponse::new("Recruiter deleted")))
}

#[utoipa::path(patch, path = "/admin/recruiters/toggle-status/{id}", tag = "recruiters", params(("id" = Uuid, Path, description = "Recruiter ID")),
    responses((status = 200, description = "Toggled"), (status = 404, description = "Not Found")))]
pub async fn toggle_status(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<recruiter::Model>> {
    Ok(Json(state.recruiters.toggle_status(id).await?))
}
