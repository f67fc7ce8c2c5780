use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub use crate::banner_package::BannerPosition;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    pub redirect_url: Option<String>,
    pub alt_text: Option<String>,
    pub position: BannerPosition,
    pub price: i64,
    pub approved: bool,
    pub is_active: bool,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub view_count: i64,
    pub click_count: i64,
    pub package_id: Option<Uuid>,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the banner may be shown at `now`: approved, active, not deleted
    /// and inside its (possibly open-ended) date window.
    pub fn is_live_at(&self, now: DateTimeWithTimeZone) -> bool {
        self.approved
            && self.is_active
            && !self.deleted
            && self.start_date.map_or(true, |s| s <= now)
            && self.end_date.map_or(true, |e| e >= now)
    }
}
