use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::types::MessageResponse;
use models::account;
use service::accounts::domain::{AccountFilter, AccountWithRoles, CreateAccount, UpdateAccount};
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/accounts", get(list))
        .route("/admin/accounts/create", post(create))
        .route("/admin/accounts/:id", get(detail).patch(update).delete(remove))
        .route("/admin/accounts/:id/roles", get(with_roles))
}

#[utoipa::path(get, path = "/admin/accounts", tag = "accounts", responses((status = 200, description = "Paged accounts")))]
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<AccountFilter>) -> ApiResult<Json<Page<account::Model>>> {
    Ok(Json(state.accounts.list(&filter).await?))
}

#[utoipa::path(post, path = "/admin/accounts/create", tag = "accounts", request_body = crate::openapi::CreateAccountDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error"), (status = 409, description = "Email in use")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateAccount>) -> ApiResult<Json<account::Model>> {
    Ok(Json(state.accounts.create(input).await?))
}

#[utoipa::path(get, path = "/admin/accounts/{id}", tag = "accounts", params(("id" = Uuid, Path, description = "Account ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<account::Model>> {
    Ok(Json(state.accounts.get(id).await?))
}

#[utoipa::path(get, path = "/admin/accounts/{id}/roles", tag = "accounts", params(("id" = Uuid, Path, description = "Account ID")),
    responses((status = 200, description = "Account with resolved roles"), (status = 404, description = "Not Found")))]
pub async fn with_roles(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<AccountWithRoles>> {
    Ok(Json(state.accounts.get_with_roles(id).await?))
}

#[utoipa::path(patch, path = "/admin/accounts/{id}", tag = "accounts", params(("id" = Uuid, Path, description = "Account ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"), (status = 409, description = "Email in use")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateAccount>) -> ApiResult<Json<account::Model>> {
    Ok(Json(state.accounts.update(id, input).await?))
}

#[utoipa::path(delete, path = "/admin/accounts/{id}", tag = "accounts", params(("id" = Uuid, Path, description = "Account ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.accounts.delete(id).await?;
    Ok(Json(MessageResponse::new("Account deleted")))
}
