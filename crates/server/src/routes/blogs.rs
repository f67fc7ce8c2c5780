use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use common::types::{MessageResponse, MessageWithData};
use models::blog;
use service::blogs::domain::{CreateBlog, PublicBlogFilter, UpdateBlog};
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/blogs", get(list_published)).route("/blogs/:slug", get(published))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/blogs", get(list_all).post(create))
        .route("/admin/blogs/:id", get(detail).patch(update).delete(remove))
}

#[utoipa::path(get, path = "/blogs", tag = "blogs", responses((status = 200, description = "Paged published posts")))]
pub async fn list_published(State(state): State<AppState>, ApiQuery(filter): ApiQuery<PublicBlogFilter>) -> ApiResult<Json<Page<blog::Model>>> {
    Ok(Json(state.blogs.list_published(&filter).await?))
}

#[utoipa::path(get, path = "/blogs/{slug}", tag = "blogs", params(("slug" = String, Path, description = "Post slug")),
    responses((status = 200, description = "Published post"), (status = 404, description = "Not Found")))]
pub async fn published(State(state): State<AppState>, ApiPath(slug): ApiPath<String>) -> ApiResult<Json<blog::Model>> {
    Ok(Json(state.blogs.get_published(&slug).await?))
}

#[utoipa::path(get, path = "/admin/blogs", tag = "blogs", responses((status = 200, description = "All posts, newest first")))]
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Json<Vec<blog::Model>>> {
    Ok(Json(state.blogs.list_all().await?))
}

#[utoipa::path(post, path = "/admin/blogs", tag = "blogs", request_body = crate::openapi::CreateBlogDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateBlog>) -> ApiResult<Json<MessageWithData<blog::Model>>> {
    let post = state.blogs.create(input).await?;
    Ok(Json(MessageWithData::new("Blog created", post)))
}

#[utoipa::path(get, path = "/admin/blogs/{id}", tag = "blogs", params(("id" = Uuid, Path, description = "Blog ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<blog::Model>> {
    Ok(Json(state.blogs.get(id).await?))
}

#[utoipa::path(patch, path = "/admin/blogs/{id}", tag = "blogs", params(("id" = Uuid, Path, description = "Blog ID")),
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found")))]
pub async fn update(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateBlog>) -> ApiResult<Json<MessageWithData<blog::Model>>> {
    let post = state.blogs.update(id, input).await?;
    Ok(Json(MessageWithData::new("Blog updated", post)))
}

#[utoipa::path(delete, path = "/admin/blogs/{id}", tag = "blogs", params(("id" = Uuid, Path, description = "Blog ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.blogs.delete(id).await?;
    Ok(Json(MessageResponse::new("Blog deleted")))
}
