use axum::extract::State;
use axum::routing::{get, patch};
use axum::{Json, Router};
use common::types::MessageWithData;
use models::site_setting;
use service::site_settings::SiteSettingsPatch;

use crate::errors::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/site-settings", get(current))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/site-settings", patch(update))
}

#[utoipa::path(get, path = "/site-settings", tag = "site-settings", responses((status = 200, description = "Settings or defaults")))]
pub async fn current(State(state): State<AppState>) -> ApiResult<Json<site_setting::Model>> {
    Ok(Json(state.site_settings.get().await?))
}

#[utoipa::path(patch, path = "/admin/site-settings", tag = "site-settings", request_body = crate::openapi::SiteSettingsPatchDoc,
    responses((status = 200, description = "Saved"), (status = 400, description = "Invalid color")))]
pub async fn update(State(state): State<AppState>, ApiJson(patch): ApiJson<SiteSettingsPatch>) -> ApiResult<Json<MessageWithData<site_setting::Model>>> {
    let saved = state.site_settings.update(patch).await?;
    Ok(Json(MessageWithData::new("Site settings updated", saved)))
}
