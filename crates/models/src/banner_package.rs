use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Slot on the client home page a banner is rendered in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BannerPosition {
    #[sea_orm(string_value = "BELOW_SEARCH_BAR")]
    #[serde(rename = "BELOW_SEARCH_BAR")]
    BelowSearchBar,
    #[sea_orm(string_value = "BELOW_FEATURED_COMPANIES")]
    #[serde(rename = "BELOW_FEATURED_COMPANIES")]
    BelowFeaturedCompanies,
}

impl BannerPosition {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "BELOW_SEARCH_BAR" => Ok(Self::BelowSearchBar),
            "BELOW_FEATURED_COMPANIES" => Ok(Self::BelowFeaturedCompanies),
            other => Err(ModelError::Validation(format!("invalid banner position '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banner_package")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub position: BannerPosition,
    pub preview_image: Option<String>,
    pub duration_days: i32,
    pub price: i64,
    pub max_banner_slots: i32,
    pub priority: i32,
    pub is_active: bool,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Longest window a package may sell, in days.
pub const MAX_DURATION_DAYS: i32 = 3650;

pub fn validate_terms(duration_days: i32, price: i64, max_banner_slots: i32) -> Result<(), ModelError> {
    if duration_days <= 0 || duration_days > MAX_DURATION_DAYS {
        return Err(ModelError::validation(format!("durationDays must be in 1..={MAX_DURATION_DAYS}")));
    }
    if price < 0 {
        return Err(ModelError::validation("price must be >= 0"));
    }
    if max_banner_slots <= 0 {
        return Err(ModelError::validation("maxBannerSlots must be > 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parse() {
        assert_eq!(BannerPosition::parse("below_search_bar").unwrap(), BannerPosition::BelowSearchBar);
        assert!(BannerPosition::parse("SIDEBAR").is_err());
    }

    #[test]
    fn package_terms() {
        assert!(validate_terms(30, 0, 1).is_ok());
        assert!(validate_terms(0, 100, 1).is_err());
        assert!(validate_terms(MAX_DURATION_DAYS, 100, 1).is_ok());
        assert!(validate_terms(100_000_000, 100, 1).is_err());
        assert!(validate_terms(30, -5, 1).is_err());
        assert!(validate_terms(30, 5, 0).is_err());
    }
}
