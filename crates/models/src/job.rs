use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub quantity: Option<i32>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub salary_type: Option<String>,
    pub salary_negotiable: bool,
    pub career: Option<String>,
    pub category_id: Option<Uuid>,
    pub level: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub deadline: Option<DateTimeWithTimeZone>,
    pub is_active: bool,
    pub status: String,
    pub reason_reject: Option<String>,
    pub views: i64,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub recruiter_id: Option<Uuid>,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_salary(min: Option<i64>, max: Option<i64>) -> Result<(), ModelError> {
    if min.is_some_and(|v| v < 0) || max.is_some_and(|v| v < 0) {
        return Err(ModelError::validation("salary must be >= 0"));
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(ModelError::validation("salaryMin must not exceed salaryMax"));
        }
    }
    Ok(())
}

/// Reject lists holding the same entry twice (after trimming).
pub fn ensure_distinct(field: &str, values: &[String]) -> Result<(), ModelError> {
    for (i, v) in values.iter().enumerate() {
        if values[..i].iter().any(|p| p.trim() == v.trim()) {
            return Err(ModelError::Validation(format!("{field} contains duplicate '{}'", v.trim())));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_bounds() {
        assert!(validate_salary(Some(10), Some(20)).is_ok());
        assert!(validate_salary(Some(10), None).is_ok());
        assert!(validate_salary(Some(30), Some(20)).is_err());
        assert!(validate_salary(Some(-1), None).is_err());
    }

    #[test]
    fn duplicate_skills_rejected() {
        let skills = vec!["rust".to_string(), "go".into(), " rust".into()];
        assert!(ensure_distinct("skills", &skills).is_err());
        assert!(ensure_distinct("skills", &skills[..2]).is_ok());
    }
}
