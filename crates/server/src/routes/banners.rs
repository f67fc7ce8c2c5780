use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use common::types::{MessageResponse, MessageWithData};
use models::{banner, banner_order, banner_package};
use serde::{Deserialize, Serialize};
use service::banners::domain::{BannerFilter, CreatePackage, OrderFilter, PackageFilter, PlaceOrder, UpdateBanner, UpdatePackage};
use service::banners::repository::BannerCounter;
use service::pagination::Page;
use uuid::Uuid;

use crate::errors::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LiveQuery {
    pub position: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalResponse {
    pub message: &'static str,
    pub banner_id: Uuid,
}

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/banners", get(live))
        .route("/banners/:id/click", post(click))
        .route("/banners/:id/view", post(view))
        .route("/banner-orders", post(place_order))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/banner-packages", get(list_packages).post(create_package))
        .route("/admin/banner-packages/:id", get(package_detail).patch(update_package).delete(remove_package))
        .route("/admin/banners", get(list_banners))
        .route("/admin/banners/:id", get(banner_detail).patch(update_banner).delete(remove_banner))
        .route("/admin/banner-orders", get(list_orders))
        .route("/admin/banner-orders/:id/approve", post(approve_order))
        .route("/admin/banner-orders/:id/reject", post(reject_order))
}

// ---- public ----

#[utoipa::path(get, path = "/banners", tag = "banners", params(("position" = Option<String>, Query, description = "BELOW_SEARCH_BAR | BELOW_FEATURED_COMPANIES")),
    responses((status = 200, description = "Live banners by price")))]
pub async fn live(State(state): State<AppState>, ApiQuery(q): ApiQuery<LiveQuery>) -> ApiResult<Json<Vec<banner::Model>>> {
    Ok(Json(state.banners.live_banners(q.position.as_deref()).await?))
}

#[utoipa::path(post, path = "/banners/{id}/click", tag = "banners", params(("id" = Uuid, Path, description = "Banner ID")),
    responses((status = 204, description = "Counted"), (status = 404, description = "Not Found")))]
pub async fn click(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<StatusCode> {
    state.banners.record(id, BannerCounter::Click).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/banners/{id}/view", tag = "banners", params(("id" = Uuid, Path, description = "Banner ID")),
    responses((status = 204, description = "Counted"), (status = 404, description = "Not Found")))]
pub async fn view(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<StatusCode> {
    state.banners.record(id, BannerCounter::View).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/banner-orders", tag = "banners", request_body = crate::openapi::PlaceOrderDoc,
    responses((status = 200, description = "Order pending"), (status = 404, description = "Package unavailable")))]
pub async fn place_order(State(state): State<AppState>, ApiJson(input): ApiJson<PlaceOrder>) -> ApiResult<Json<banner_order::Model>> {
    Ok(Json(state.banners.place_order(input).await?))
}

// ---- packages ----

#[utoipa::path(get, path = "/admin/banner-packages", tag = "banners", responses((status = 200, description = "Paged packages")))]
pub async fn list_packages(State(state): State<AppState>, ApiQuery(filter): ApiQuery<PackageFilter>) -> ApiResult<Json<Page<banner_package::Model>>> {
    Ok(Json(state.banners.list_packages(&filter).await?))
}

#[utoipa::path(post, path = "/admin/banner-packages", tag = "banners", request_body = crate::openapi::CreateBannerPackageDoc,
    responses((status = 200, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create_package(State(state): State<AppState>, ApiJson(input): ApiJson<CreatePackage>) -> ApiResult<Json<banner_package::Model>> {
    Ok(Json(state.banners.create_package(input).await?))
}

#[utoipa::path(get, path = "/admin/banner-packages/{id}", tag = "banners", params(("id" = Uuid, Path, description = "Package ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn package_detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<banner_package::Model>> {
    Ok(Json(state.banners.get_package(id).await?))
}

#[utoipa::path(patch, path = "/admin/banner-packages/{id}", tag = "banners", params(("id" = Uuid, Path, description = "Package ID")),
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn update_package(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdatePackage>) -> ApiResult<Json<banner_package::Model>> {
    Ok(Json(state.banners.update_package(id, input).await?))
}

#[utoipa::path(delete, path = "/admin/banner-packages/{id}", tag = "banners", params(("id" = Uuid, Path, description = "Package ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove_package(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.banners.delete_package(id).await?;
    Ok(Json(MessageResponse::new("Banner package deleted")))
}

// ---- banners ----

#[utoipa::path(get, path = "/admin/banners", tag = "banners", responses((status = 200, description = "Paged banners")))]
pub async fn list_banners(State(state): State<AppState>, ApiQuery(filter): ApiQuery<BannerFilter>) -> ApiResult<Json<Page<banner::Model>>> {
    Ok(Json(state.banners.list_banners(&filter).await?))
}

#[utoipa::path(get, path = "/admin/banners/{id}", tag = "banners", params(("id" = Uuid, Path, description = "Banner ID")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn banner_detail(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<banner::Model>> {
    Ok(Json(state.banners.get_banner(id).await?))
}

#[utoipa::path(patch, path = "/admin/banners/{id}", tag = "banners", params(("id" = Uuid, Path, description = "Banner ID")),
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn update_banner(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>, ApiJson(input): ApiJson<UpdateBanner>) -> ApiResult<Json<MessageWithData<banner::Model>>> {
    let b = state.banners.update_banner(id, input).await?;
    Ok(Json(MessageWithData::new("Banner updated", b)))
}

#[utoipa::path(delete, path = "/admin/banners/{id}", tag = "banners", params(("id" = Uuid, Path, description = "Banner ID")),
    responses((status = 200, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn remove_banner(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<MessageResponse>> {
    state.banners.delete_banner(id).await?;
    Ok(Json(MessageResponse::new("Banner deleted")))
}

// ---- orders ----

#[utoipa::path(get, path = "/admin/banner-orders", tag = "banners", responses((status = 200, description = "Paged orders"), (status = 400, description = "Unknown status")))]
pub async fn list_orders(State(state): State<AppState>, ApiQuery(filter): ApiQuery<OrderFilter>) -> ApiResult<Json<Page<banner_order::Model>>> {
    Ok(Json(state.banners.list_orders(&filter).await?))
}

#[utoipa::path(post, path = "/admin/banner-orders/{id}/approve", tag = "banners", params(("id" = Uuid, Path, description = "Order ID")),
    responses((status = 200, description = "Banner created"), (status = 400, description = "Wrong status"), (status = 404, description = "Not Found"), (status = 409, description = "Already approved")))]
pub async fn approve_order(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<ApprovalResponse>> {
    let approved = state.banners.approve_order(id).await?;
    Ok(Json(ApprovalResponse { message: "Order approved", banner_id: approved.banner.id }))
}

#[utoipa::path(post, path = "/admin/banner-orders/{id}/reject", tag = "banners", params(("id" = Uuid, Path, description = "Order ID")),
    responses((status = 200, description = "Cancelled"), (status = 400, description = "Not pending"), (status = 404, description = "Not Found")))]
pub async fn reject_order(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<Json<banner_order::Model>> {
    Ok(Json(state.banners.reject_order(id).await?))
}
