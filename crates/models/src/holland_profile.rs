use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::holland_question::HollandCategory;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "holland_profile")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub suitable_careers: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub image: Option<String>,
    pub deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Uppercase a profile code and require 1 to 3 distinct RIASEC letters.
pub fn normalize_code(raw: &str) -> Result<String, ModelError> {
    let code = raw.trim().to_ascii_uppercase();
    let len = code.chars().count();
    if !(1..=3).contains(&len) {
        return Err(ModelError::validation("code must have 1 to 3 letters"));
    }
    let mut seen = Vec::with_capacity(3);
    for c in code.chars() {
        if HollandCategory::from_letter(c).is_none() || seen.contains(&c) {
            return Err(ModelError::Validation(format!("invalid holland code '{code}'")));
        }
        seen.push(c);
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_rules() {
        assert!(normalize_code(" rias").is_err());
        assert_eq!(normalize_code("ria").unwrap(), "RIA");
        assert_eq!(normalize_code("s").unwrap(), "S");
        assert!(normalize_code("RRI").is_err());
        assert!(normalize_code("RXZ").is_err());
        assert!(normalize_code("").is_err());
    }
}
