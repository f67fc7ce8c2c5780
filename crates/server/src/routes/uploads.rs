use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use service::media::{ImageUpload, StoredMedia};
use tracing::info;

use crate::errors::{ApiResult, JsonApiError};
use crate::state::AppState;

pub const BLOG_FOLDER: &str = "blogs";
pub const SITE_FOLDER: &str = "site";

pub fn routes() -> Router<AppState> {
    Router::new().route("/upload/image", post(upload_image)).route("/upload/site-asset", post(upload_site_asset))
}

/// Every part named `field`, in upload order.
pub async fn collect_files(mut multipart: Multipart, field: &str) -> ApiResult<Vec<ImageUpload>> {
    let mut files = Vec::new();
    while let Some(part) = multipart.next_field().await.map_err(|e| JsonApiError::bad_request(e.body_text()))? {
        if part.name() != Some(field) {
            continue;
        }
        let file_name = part.file_name().unwrap_or_default().to_string();
        let bytes = part.bytes().await.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
        files.push(ImageUpload { file_name, bytes: bytes.to_vec() });
    }
    Ok(files)
}

/// The single part named `field`.
pub async fn single_file(multipart: Multipart, field: &str) -> ApiResult<ImageUpload> {
    collect_files(multipart, field)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| JsonApiError::bad_request(format!("missing multipart field '{field}'")))
}

async fn store(state: &AppState, folder: &str, multipart: Multipart) -> ApiResult<Json<StoredMedia>> {
    let file = single_file(multipart, "file").await?;
    let stored = state.media.put(folder, &file.file_name, &file.bytes).await?;
    info!(public_id = %stored.public_id, "media_uploaded");
    Ok(Json(stored))
}

#[utoipa::path(post, path = "/upload/image", tag = "uploads", request_body(content = String, content_type = "multipart/form-data"),
    responses((status = 200, description = "Stored", body = crate::openapi::StoredMediaDoc), (status = 400, description = "Bad file")))]
pub async fn upload_image(State(state): State<AppState>, multipart: Multipart) -> ApiResult<Json<StoredMedia>> {
    store(&state, BLOG_FOLDER, multipart).await
}

#[utoipa::path(post, path = "/upload/site-asset", tag = "uploads", request_body(content = String, content_type = "multipart/form-data"),
    responses((status = 200, description = "Stored", body = crate::openapi::StoredMediaDoc), (status = 400, description = "Bad file")))]
pub async fn upload_site_asset(State(state): State<AppState>, multipart: Multipart) -> ApiResult<Json<StoredMedia>> {
    store(&state, SITE_FOLDER, multipart).await
}
