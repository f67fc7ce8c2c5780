use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::role;
use service::pagination::Page;
use service::roles::domain::{CreateRole, RoleFilter, UpdateRole};
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/roles", get(list))
        .route("/admin/roles/create", post(create))
        .route("/admin/roles/:id", get(detail).patch(update).delete(remove))
}

#[utoipa::path(get, path = "/admin/roles", tag = "roles", responses((status = 200, description = "Paged roles")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<RoleFilter>) -> ApiResult<Json<Page<role::Model>>> {
    Ok(Json(state.roles.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/roles/create", tag = "roles", request_body = crate::openapi::CreateRoleDoc,
    responses((status = 200, description = "Created"), (status = 409, description = "Duplicate name")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateRole>) -> ApiResult<Json<role::Model>> {
    Ok(Json(state.roles.create(input).await?))
}

#[utoipa::path(get, path = "/admin/roles/{id}", tag = "roles", params(("id" = Uuid, Path, description = "Role ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<role::Model>> {
    Ok(Json(state.roles.get(id).await?))
}

#[utoipa::path(patch, path = "/admin/roles/{id}", tag = "roles", params(("id" = Uuid, Path, description = "Role ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 409, description = "Duplicate name")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateRole>) -> ApiResult<Json<role::Model>> {
    Ok(Json(state.roles.update(id, input).await?))
}

#[utoipa::path(delete, path = "/admin/roles/{id}", tag = "roles", params(("id" = Uuid, Path, description = "Role ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.roles.delete(id).await?;
    Ok(Json(MessageResponse::new("Role deleted")))
}
