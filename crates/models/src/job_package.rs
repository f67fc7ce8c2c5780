use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    #[default]
    None,
    Email,
    Hotline,
    Priority,
}

/// Feature set of a job package, stored as one `jsonb` column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
    pub job_post_limit: i32,
    pub auto_approve: bool,
    pub highlight: bool,
    pub show_on_homepage: bool,
    pub analytics_access: bool,
    pub support_level: SupportLevel,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_package")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub package_name: String,
    pub price: i64,
    pub duration_days: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Features,
    pub priority_level: i32,
    pub is_active: bool,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_terms(price: i64, duration_days: i32, features: &Features) -> Result<(), ModelError> {
    if price < 0 {
        return Err(ModelError::validation("price must be >= 0"));
    }
    if duration_days <= 0 {
        return Err(ModelError::validation("durationDays must be > 0"));
    }
    if features.job_post_limit < 0 {
        return Err(ModelError::validation("features.jobPostLimit must be >= 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_fill_missing_fields() {
        let f: Features = serde_json::from_str(r#"{"jobPostLimit":5,"supportLevel":"hotline"}"#).unwrap();
        assert_eq!(f.job_post_limit, 5);
        assert_eq!(f.support_level, SupportLevel::Hotline);
        assert!(!f.highlight);
    }

    #[test]
    fn unknown_support_level_is_rejected() {
        assert!(serde_json::from_str::<Features>(r#"{"supportLevel":"vip"}"#).is_err());
    }

    #[test]
    fn terms() {
        assert!(validate_terms(0, 30, &Features::default()).is_ok());
        assert!(validate_terms(-1, 30, &Features::default()).is_err());
        assert!(validate_terms(10, 0, &Features::default()).is_err());
    }
}
