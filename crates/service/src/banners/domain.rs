use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub position: Option<String>,
    pub approved: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub package_id: Option<Uuid>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackage {
    pub name: String,
    pub description: Option<String>,
    pub position: String,
    pub preview_image: Option<String>,
    pub duration_days: i32,
    pub price: i64,
    pub max_banner_slots: i32,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePackage {
    pub name: Option<String>,
    pub description: Option<String>,
    pub position: Option<String>,
    pub preview_image: Option<String>,
    pub duration_days: Option<i32>,
    pub price: Option<i64>,
    pub max_banner_slots: Option<i32>,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBanner {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub redirect_url: Option<String>,
    pub alt_text: Option<String>,
    pub position: Option<String>,
    pub price: Option<i64>,
    pub approved: Option<bool>,
    pub is_active: Option<bool>,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

/// Banner placement requested by a customer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub package_id: Uuid,
    pub account_id: Option<Uuid>,
    pub recruiter_id: Option<Uuid>,
    pub company_id: Option<Uuid>,
    pub title: String,
    pub image_url: String,
    pub redirect_url: Option<String>,
    pub alt_text: Option<String>,
}
